use std::io::{Cursor, Read};

use serde::Serialize;
use tiny_http::{Request, Response};

use hematite_ml::Gaussian2d;
use hematite_ml::data::blobs::{invert_labels, make_blobs};
use hematite_ml::plot::{density_plot, encode_png, scatter_plot};

use crate::render::render_page;
use crate::routes::{error_response, html_response, json_response, png_response, redirect};
use crate::state::{SceneState, SharedState, TrainingStatus};
use crate::util::query::Params;

const BLOB_STD: f64 = 0.5;
const DENSITY_HALF_EXTENT: f64 = 3.0;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_page(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    let hp = st.hyperparams.clone();
    let num_samples = st.scene.blobs.points.len();
    let is_running = matches!(st.training, TrainingStatus::Running { .. });
    let summary = fit_summary_html(&st.scene);
    let has_adapted = st.scene.adapted.is_some();
    drop(st);

    html_response(render_page(|tmpl| {
        tmpl.replace("{{SAMPLES}}", &num_samples.to_string())
            .replace("{{FIT_SUMMARY}}", &summary)
            .replace("{{HAS_ADAPTED}}", if has_adapted { "true" } else { "false" })
            .replace("{{LEARNING_RATE}}", &hp.learning_rate.to_string())
            .replace("{{ITERATIONS}}", &hp.iterations.to_string())
            .replace("{{TRAINING_RUNNING}}", if is_running { "true" } else { "false" })
    }))
}

fn fit_summary_html(scene: &SceneState) -> String {
    let row = |name: &str, g: &Gaussian2d| {
        format!(
            "<div class=\"fit-row\"><span class=\"fit-lbl\">{name}</span>\
             <span class=\"fit-val\">mean ({:.3}, {:.3}) · var ({:.3}, {:.3})</span></div>",
            g.mean[0], g.mean[1], g.covariance.data[0][0], g.covariance.data[1][1],
        )
    };

    let mut html = row("cluster 1 (MLE)", &scene.fit_cluster1);
    html.push_str(&row("cluster 0 (MLE)", &scene.fit_cluster0));
    if let Some((tau, adapted)) = &scene.adapted {
        html.push_str(&row(&format!("cluster 1 (MAP, tau = {tau})"), adapted));
    }
    html
}

// ---------------------------------------------------------------------------
// POST /blobs/generate
// ---------------------------------------------------------------------------

pub fn handle_generate(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let params = Params::parse(&body);

    let num_samples = params.get_usize("samples", 100).clamp(4, 10_000);
    let std = params.get_f64("std", BLOB_STD).clamp(0.01, 5.0);

    let mut st = state.lock().unwrap();
    st.scene = SceneState::generate(num_samples, std);
    drop(st);

    redirect("/")
}

// ---------------------------------------------------------------------------
// POST /adapt
// ---------------------------------------------------------------------------

pub fn handle_adapt(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let params = Params::parse(&body);

    let tau = params.get_f64("tau", 0.2).max(0.0);
    let num_samples = params.get_usize("samples", 10).clamp(2, 1_000);

    let mut st = state.lock().unwrap();
    // Fresh adaptation data, labeled for the *other* blob, so the MAP update
    // visibly drags the cluster-1 estimate.
    let adaptation = make_blobs(num_samples, [BLOB_STD, BLOB_STD], (-2.0, 2.0));
    let adaptation_labels = invert_labels(&adaptation.labels);
    let adapted = st.scene.fit_cluster1.adapt_map(&adaptation.points, &adaptation_labels, tau);
    st.scene.adapted = Some((tau, adapted));
    drop(st);

    redirect("/")
}

// ---------------------------------------------------------------------------
// GET /api/scene
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SceneJson<'a> {
    points: &'a [[f64; 2]],
    labels: &'a [f64],
    cluster1: &'a Gaussian2d,
    cluster0: &'a Gaussian2d,
    adapted: Option<AdaptedJson<'a>>,
}

#[derive(Serialize)]
struct AdaptedJson<'a> {
    tau: f64,
    gaussian: &'a Gaussian2d,
}

pub fn handle_scene_json(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    let payload = SceneJson {
        points: &st.scene.blobs.points,
        labels: &st.scene.blobs.labels,
        cluster1: &st.scene.fit_cluster1,
        cluster0: &st.scene.fit_cluster0,
        adapted: st.scene.adapted.as_ref().map(|(tau, g)| AdaptedJson { tau: *tau, gaussian: g }),
    };
    match serde_json::to_string(&payload) {
        Ok(json) => json_response(json),
        Err(_) => error_response(500, "failed to encode scene"),
    }
}

// ---------------------------------------------------------------------------
// GET /plot/blobs.png and /plot/density.png?which=...
// ---------------------------------------------------------------------------

pub fn handle_blobs_png(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    let img = scatter_plot(&st.scene.blobs.points, &st.scene.blobs.labels, 512);
    drop(st);

    match encode_png(&img) {
        Ok(bytes) => png_response(bytes),
        Err(_) => error_response(500, "failed to encode plot"),
    }
}

pub fn handle_density_png(query: &str, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let params = Params::parse(query);
    let which = params.get("which").unwrap_or("cluster1");

    let st = state.lock().unwrap();
    let gaussian = match which {
        "cluster0" => st.scene.fit_cluster0.clone(),
        "adapted" => match &st.scene.adapted {
            Some((_, g)) => g.clone(),
            None => return error_response(404, "no adaptation has been run yet"),
        },
        _ => st.scene.fit_cluster1.clone(),
    };
    drop(st);

    let img = density_plot(&gaussian, DENSITY_HALF_EXTENT, 400);
    match encode_png(&img) {
        Ok(bytes) => png_response(bytes),
        Err(_) => error_response(500, "failed to encode plot"),
    }
}
