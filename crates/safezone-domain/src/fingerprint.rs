use safezone_types::GeoPoint;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a hazard finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - report latitude and longitude, rounded to 1e-7 degrees (about 1 cm)
pub fn fingerprint_for_report(check_id: &str, code: &str, point: GeoPoint) -> String {
    let canonical = format!("{check_id}|{code}|{:.7}|{:.7}", point.lat, point.lon);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
