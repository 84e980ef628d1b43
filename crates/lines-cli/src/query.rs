//! JSON query batches evaluated through `lines2d::checked`.
//!
//! Points are `[x, y]`, lines are `{"start": [x, y], "end": [x, y]}`. Any of
//! them may be `null` or omitted; that surfaces as an `InvalidArgument` result
//! for that query only.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use lines2d::checked::{self, LooseLine};
use lines2d::{LinesError, Point2D, SlopeIntercept};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

type PointDto = [f64; 2];

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LineDto {
    pub start: Option<PointDto>,
    pub end: Option<PointDto>,
}

/// One operation request.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    Distance {
        a: Option<PointDto>,
        b: Option<PointDto>,
    },
    SlopeIntercept {
        line: Option<LineDto>,
    },
    SlopeInterceptPoints {
        a: Option<PointDto>,
        b: Option<PointDto>,
    },
    Parallel {
        l1: Option<LineDto>,
        l2: Option<LineDto>,
    },
    Perpendicular {
        l1: Option<LineDto>,
        l2: Option<LineDto>,
    },
    IncidentPoint {
        l1: Option<LineDto>,
        l2: Option<LineDto>,
    },
}

impl Query {
    pub fn op(&self) -> &'static str {
        match self {
            Query::Distance { .. } => "distance",
            Query::SlopeIntercept { .. } => "slope_intercept",
            Query::SlopeInterceptPoints { .. } => "slope_intercept_points",
            Query::Parallel { .. } => "parallel",
            Query::Perpendicular { .. } => "perpendicular",
            Query::IncidentPoint { .. } => "incident_point",
        }
    }
}

/// Per-query result; a failed query does not abort the batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Ok { ok: Value },
    Error { error: String },
}

fn point(p: Option<PointDto>) -> Option<Point2D> {
    p.map(|[x, y]| Point2D::new(x, y))
}

fn loose(l: &Option<LineDto>) -> Option<LooseLine> {
    l.as_ref()
        .map(|l| LooseLine::new(point(l.start), point(l.end)))
}

/// JSON numbers cannot hold non-finite values; those become the strings
/// `"inf"`, `"-inf"` and `"NaN"` instead of serde_json's `null`.
fn num(v: f64) -> Value {
    if v.is_finite() {
        json!(v)
    } else if v.is_nan() {
        json!("NaN")
    } else if v > 0.0 {
        json!("inf")
    } else {
        json!("-inf")
    }
}

fn point_json(p: Point2D) -> Value {
    json!([num(p.x), num(p.y)])
}

fn slope_json(si: SlopeIntercept) -> Value {
    json!({ "slope": num(si.slope), "y_intercept": num(si.y_intercept) })
}

pub fn evaluate(query: &Query) -> std::result::Result<Value, LinesError> {
    match query {
        Query::Distance { a, b } => checked::distance(point(*a), point(*b)).map(num),
        Query::SlopeInterceptPoints { a, b } => {
            checked::slope_intercept(point(*a), point(*b)).map(slope_json)
        }
        Query::SlopeIntercept { line } => {
            checked::slope_intercept_of(loose(line).as_ref()).map(slope_json)
        }
        Query::Parallel { l1, l2 } => {
            checked::is_parallel(loose(l1).as_ref(), loose(l2).as_ref()).map(|b| json!(b))
        }
        Query::Perpendicular { l1, l2 } => {
            checked::is_perpendicular(loose(l1).as_ref(), loose(l2).as_ref()).map(|b| json!(b))
        }
        Query::IncidentPoint { l1, l2 } => {
            checked::incident_point(loose(l1).as_ref(), loose(l2).as_ref()).map(point_json)
        }
    }
}

pub fn evaluate_batch(queries: &[Query]) -> Vec<Outcome> {
    queries
        .iter()
        .enumerate()
        .map(|(idx, q)| match evaluate(q) {
            Ok(ok) => Outcome::Ok { ok },
            Err(err) => {
                tracing::warn!(idx, op = q.op(), %err, "query_failed");
                Outcome::Error {
                    error: err.to_string(),
                }
            }
        })
        .collect()
}

/// Read a JSON array of queries from `input`, or from stdin when `input == "-"`.
pub fn read_queries(input: &str) -> Result<Vec<Query>> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading queries from stdin")?;
        buf
    } else {
        let path = Path::new(input);
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("parsing queries from {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(text: &str) -> Vec<Query> {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn batch_mixes_results_and_errors() {
        let queries = parse(
            r#"[
                {"op": "distance", "a": [1, 4], "b": [-2, 3]},
                {"op": "distance", "a": null, "b": [0, 0]},
                {"op": "slope_intercept", "line": {"start": [1, 3], "end": [1, -2]}},
                {"op": "parallel", "l1": {"start": [1, 3], "end": [1, -2]},
                                   "l2": {"start": [3, 3], "end": [3, -2]}},
                {"op": "incident_point", "l1": {"start": [1, 1], "end": [4, 4]},
                                         "l2": {"start": [1, 8], "end": [2, 4]}},
                {"op": "perpendicular", "l1": {"start": null, "end": null}, "l2": {}}
            ]"#,
        );
        let out = evaluate_batch(&queries);
        assert_eq!(out.len(), 6);
        assert_eq!(
            out[0],
            Outcome::Ok {
                ok: json!(3.1622776601683795)
            }
        );
        assert_eq!(
            out[1],
            Outcome::Error {
                error: "invalid argument: point a is missing".to_string()
            }
        );
        assert_eq!(
            out[2],
            Outcome::Ok {
                ok: json!({"slope": 0.0, "y_intercept": f64::MAX})
            }
        );
        assert_eq!(out[3], Outcome::Ok { ok: json!(true) });
        assert_eq!(out[4], Outcome::Ok { ok: json!([2.4, 2.4]) });
        assert!(matches!(out[5], Outcome::Error { .. }));
    }

    #[test]
    fn omitted_fields_count_as_missing() {
        let queries = parse(r#"[{"op": "incident_point"}, {"op": "slope_intercept_points", "a": [0, 0]}]"#);
        let out = evaluate_batch(&queries);
        assert_eq!(
            out[0],
            Outcome::Error {
                error: "invalid argument: line l1 is missing".to_string()
            }
        );
        assert_eq!(
            out[1],
            Outcome::Error {
                error: "invalid argument: point b is missing".to_string()
            }
        );
    }

    #[test]
    fn non_finite_results_are_spelled_out() {
        let queries = parse(
            r#"[
                {"op": "distance", "a": [1e308, 0], "b": [-1e308, 0]},
                {"op": "slope_intercept_points", "a": [0, 0], "b": [1e-320, 1e300]},
                {"op": "incident_point", "l1": {"start": [0, 0], "end": [0, 0]},
                                         "l2": {"start": [1, 1], "end": [1, 1]}}
            ]"#,
        );
        let out = evaluate_batch(&queries);
        assert_eq!(out[0], Outcome::Ok { ok: json!("inf") });
        assert_eq!(
            out[1],
            Outcome::Ok {
                ok: json!({"slope": "inf", "y_intercept": "NaN"})
            }
        );
        // zero-length lines: determinant 0, sentinel stays a finite number
        assert_eq!(
            out[2],
            Outcome::Ok {
                ok: json!([f64::MAX, f64::MAX])
            }
        );
        assert_eq!(num(f64::NEG_INFINITY), json!("-inf"));
        assert_eq!(num(-0.5), json!(-0.5));
    }

    #[test]
    fn outcomes_serialize_flat() {
        let out = vec![
            Outcome::Ok { ok: json!(false) },
            Outcome::Error {
                error: "boom".to_string(),
            },
        ];
        let text = serde_json::to_string(&out).unwrap();
        assert_eq!(text, r#"[{"ok":false},{"error":"boom"}]"#);
    }

    #[test]
    fn read_queries_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("q.json");
        fs::write(&path, r#"[{"op": "distance", "a": [0, 0], "b": [3, 4]}]"#).unwrap();
        let queries = read_queries(path.to_str().unwrap()).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(evaluate(&queries[0]), Ok(json!(5.0)));
    }

    #[test]
    fn read_queries_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"op": "rotate"}]"#).unwrap();
        let err = read_queries(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("parsing queries from"));
    }
}
