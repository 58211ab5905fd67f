use hand_geometry::geometry::{self, Point3 as CorePoint3};
use hand_geometry::gesture::{self, GestureThresholds, LandmarkSet};
use hand_geometry::batch;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass]
#[derive(Clone)]
struct Point3 {
    inner: CorePoint3,
}

#[pymethods]
impl Point3 {
    #[new]
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self { inner: CorePoint3::new(x, y, z) }
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y
    }

    #[getter]
    fn z(&self) -> f64 {
        self.inner.z
    }

    fn __repr__(&self) -> String {
        format!("Point3({}, {}, {})", self.inner.x, self.inner.y, self.inner.z)
    }
}

impl From<CorePoint3> for Point3 {
    fn from(inner: CorePoint3) -> Self {
        Self { inner }
    }
}

fn to_points(raw: Vec<(f64, f64, f64)>) -> Vec<CorePoint3> {
    raw.into_iter().map(CorePoint3::from).collect()
}

#[pyfunction]
fn distance(a: &Point3, b: &Point3) -> f64 {
    geometry::distance(a.inner, b.inner)
}

/// Angle at `b` in degrees. Raises `ValueError` when a ray has zero length.
#[pyfunction]
fn angle(a: &Point3, b: &Point3, c: &Point3) -> PyResult<f64> {
    geometry::angle(a.inner, b.inner, c.inner).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn normalize(v: &Point3) -> Point3 {
    geometry::normalize(v.inner).into()
}

#[pyfunction]
fn dot(a: &Point3, b: &Point3) -> f64 {
    geometry::dot(a.inner, b.inner)
}

#[pyfunction]
fn cross(a: &Point3, b: &Point3) -> Point3 {
    geometry::cross(a.inner, b.inner).into()
}

#[pyfunction]
#[pyo3(signature = (thumb_tip, index_tip, threshold=None))]
fn is_pinch(thumb_tip: &Point3, index_tip: &Point3, threshold: Option<f64>) -> bool {
    let threshold = threshold.unwrap_or(gesture::PINCH_THRESHOLD);
    gesture::is_pinch_with(thumb_tip.inner, index_tip.inner, threshold)
}

#[pyfunction]
fn is_fist(fingers: Vec<(f64, f64, f64)>) -> bool {
    gesture::is_fist(&to_points(fingers))
}

#[pyfunction]
fn is_palm_open(fingers: Vec<(f64, f64, f64)>) -> bool {
    gesture::is_palm_open(&to_points(fingers))
}

/// Returns `(gesture, pose)` labels for a list of 21 `(x, y, z)` landmarks.
#[pyfunction]
#[pyo3(signature = (landmarks, pinch=None, curl_y=None))]
fn classify(
    landmarks: Vec<(f64, f64, f64)>,
    pinch: Option<f64>,
    curl_y: Option<f64>,
) -> PyResult<(String, String)> {
    let hand =
        LandmarkSet::new(to_points(landmarks)).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let defaults = GestureThresholds::default();
    let thresholds = GestureThresholds {
        pinch: pinch.unwrap_or(defaults.pinch),
        curl_y: curl_y.unwrap_or(defaults.curl_y),
    };
    let verdict = gesture::classify(&hand, &thresholds);
    let pose = gesture::classify_pose(&hand);
    Ok((verdict.to_string(), pose.to_string()))
}

/// Element-wise distances. Raises `ValueError` when the lists differ in length.
#[pyfunction]
#[pyo3(signature = (a, b, parallel=false))]
fn batch_distances(
    a: Vec<(f64, f64, f64)>,
    b: Vec<(f64, f64, f64)>,
    parallel: bool,
) -> PyResult<Vec<f64>> {
    let (a, b) = (to_points(a), to_points(b));
    let result = if parallel {
        batch::par_batch_distances(&a, &b)
    } else {
        batch::batch_distances(&a, &b)
    };
    result.map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn hand_geometry_python(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<Point3>()?;
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(angle, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(dot, m)?)?;
    m.add_function(wrap_pyfunction!(cross, m)?)?;
    m.add_function(wrap_pyfunction!(is_pinch, m)?)?;
    m.add_function(wrap_pyfunction!(is_fist, m)?)?;
    m.add_function(wrap_pyfunction!(is_palm_open, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(batch_distances, m)?)?;
    Ok(())
}
