/// Derive the cache key for a text in a given language.
///
/// The key is `<language>_<md5(text) as lowercase hex>`. The text is hashed
/// exactly as given, so texts that only differ in case or whitespace get
/// different keys. MD5 is only a content fingerprint here, not a security
/// boundary.
pub fn cache_key(language: &str, text: &str) -> String {
    let digest = md5::compute(text.as_bytes());
    format!("{}_{:x}", language, digest)
}
