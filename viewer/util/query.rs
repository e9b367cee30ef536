/// Decodes a percent-encoded string (`%XX`) and converts `+` to space.
fn url_decode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push((((h << 4) | l) as u8) as char);
                        i += 3;
                    }
                    _ => {
                        out.push('%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b as char);
                i += 1;
            }
        }
    }
    out
}

/// Key/value pairs parsed from a query string or urlencoded form body.
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Parses `key=value&key2=value2`.
    pub fn parse(body: &str) -> Params {
        Params(
            body.split('&')
                .filter_map(|pair| {
                    let mut it = pair.splitn(2, '=');
                    let k = it.next()?.to_owned();
                    let v = it.next().unwrap_or("").to_owned();
                    Some((url_decode(&k), url_decode(&v)))
                })
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Numeric parameter with a fallback for missing or unparsable values.
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
    }

    pub fn get_usize(&self, key: &str, default: usize) -> usize {
        self.get(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typed_values_with_defaults() {
        let p = Params::parse("tau=0.2&samples=100&label=a+b%21");
        assert_eq!(p.get_f64("tau", 1.0), 0.2);
        assert_eq!(p.get_usize("samples", 10), 100);
        assert_eq!(p.get_usize("missing", 7), 7);
        assert_eq!(p.get("label"), Some("a b!"));
    }
}
