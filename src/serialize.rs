use ncollide2d::na::Point2;
use serde::ser::Serializer;
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializes a list of points as `[[x, y], ...]`
pub fn point_list<S: Serializer>(points: &[Point2<f64>], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(points.iter().map(|p| [p.x, p.y]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(with = "Point2f64")]
        point: Point2<f64>,

        #[serde(serialize_with = "point_list")]
        points: Vec<Point2<f64>>,
    }

    #[test]
    fn test_points_to_json() {
        let w = Wrapper {
            point: Point2::new(0.5, -0.25),
            points: vec![Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)],
        };
        assert_eq!(
            r#"{"point":{"x":0.5,"y":-0.25},"points":[[1.0,0.0],[0.0,0.0]]}"#,
            serde_json::to_string(&w).unwrap()
        );
    }
}
