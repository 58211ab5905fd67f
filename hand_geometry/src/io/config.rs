use crate::gesture::GestureThresholds;

/// Loads gesture thresholds from a JSON file. Missing fields take their
/// default values.
pub fn read_thresholds_json(path: &str) -> std::io::Result<GestureThresholds> {
    let contents = crate::io::read_to_string(path)?;
    let thresholds: GestureThresholds = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    log::debug!("loaded gesture thresholds from {}: {:?}", path, thresholds);
    Ok(thresholds)
}

pub fn write_thresholds_json(path: &str, thresholds: &GestureThresholds) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(thresholds).map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.json");
        let path = path.to_str().unwrap();
        crate::io::write_string(path, r#"{ "pinch": 0.08 }"#).unwrap();
        let t = read_thresholds_json(path).unwrap();
        assert_eq!(t.pinch, 0.08);
        assert_eq!(t.curl_y, 0.5);
    }

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.json");
        let path = path.to_str().unwrap();
        let t = GestureThresholds {
            pinch: 0.03,
            curl_y: 0.45,
        };
        write_thresholds_json(path, &t).unwrap();
        assert_eq!(read_thresholds_json(path).unwrap(), t);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.json");
        let path = path.to_str().unwrap();
        crate::io::write_string(path, "{ pinch: ").unwrap();
        let err = read_thresholds_json(path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
