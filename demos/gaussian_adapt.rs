use hematite_ml::Gaussian2d;
use hematite_ml::data::blobs::{invert_labels, make_blobs};
use hematite_ml::plot::{density_plot, scatter_plot};

fn main() {
    // Two labeled blobs on the plane; labels are 0/1 cluster membership.
    let data = make_blobs(100, [0.5, 0.5], (-2.0, 2.0));
    let labels_1 = data.labels.clone();
    let labels_0 = invert_labels(&data.labels);

    // MLE fit per cluster.
    let g_1 = Gaussian2d::fit_mle(&data.points, &labels_1);
    let g_0 = Gaussian2d::fit_mle(&data.points, &labels_0);

    println!("cluster 1: mean = {:?}", g_1.mean);
    println!("           var  = [{}, {}]", g_1.covariance.data[0][0], g_1.covariance.data[1][1]);
    println!("cluster 0: mean = {:?}", g_0.mean);
    println!("           var  = [{}, {}]", g_0.covariance.data[0][0], g_0.covariance.data[1][1]);

    scatter_plot(&data.points, &data.labels, 512)
        .save("blobs.png")
        .expect("failed to write blobs.png");
    density_plot(&g_1, 3.0, 512)
        .save("density_cluster1.png")
        .expect("failed to write density_cluster1.png");

    // Adaptation: a small fresh sample, fit against the *other* blob, pulls
    // the cluster-1 estimate toward it depending on tau.
    let adaptation = make_blobs(10, [0.5, 0.5], (-2.0, 2.0));
    let adaptation_labels = invert_labels(&adaptation.labels);
    let mle_of_new = Gaussian2d::fit_mle(&adaptation.points, &adaptation_labels);

    println!();
    println!("prior mean:         {:?}", g_1.mean);
    println!("adaptation-data mean: {:?}", mle_of_new.mean);
    for tau in [0.0, 0.2, 5.0, 50.0] {
        let adapted = g_1.adapt_map(&adaptation.points, &adaptation_labels, tau);
        println!("adapted mean (tau = {tau:>4}): {:?}", adapted.mean);
    }

    let adapted = g_1.adapt_map(&adaptation.points, &adaptation_labels, 0.2);
    density_plot(&adapted, 3.0, 512)
        .save("density_adapted.png")
        .expect("failed to write density_adapted.png");

    adapted
        .save_json("gaussian_adapted.json")
        .expect("failed to write gaussian_adapted.json");

    println!();
    println!("wrote blobs.png, density_cluster1.png, density_adapted.png, gaussian_adapted.json");
}
