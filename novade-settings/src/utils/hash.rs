//! Name fingerprints for fast setting lookup.

/// Computes the djb2 fingerprint of a setting name.
///
/// The registry treats zero as "no name", so a name whose hash happens to be
/// zero is mapped to one.
///
/// # Examples
///
/// ```
/// use novade_settings::utils::hash::fingerprint;
///
/// assert_eq!(fingerprint(""), 5381);
/// assert_ne!(fingerprint("video_vsync"), fingerprint("video_smooth"));
/// ```
pub fn fingerprint(name: &str) -> u32 {
    let hash = name
        .bytes()
        .fold(5381u32, |hash, byte| (hash << 5).wrapping_add(hash).wrapping_add(u32::from(byte)));
    if hash == 0 {
        1
    } else {
        hash
    }
}
