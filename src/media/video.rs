const WATCH_MARKER: &str = "youtube.com/watch?v=";
const SHORT_MARKER: &str = "youtu.be/";

/// Rewrite a YouTube watch or short link into its embeddable `/embed/` form.
///
/// - `https://www.youtube.com/watch?v=ABC123` -> `https://www.youtube.com/embed/ABC123`
/// - `https://youtu.be/ABC123` -> `https://youtube.com/embed/ABC123`
///
/// Anything else comes back unchanged. The result is not checked for reachability.
pub fn normalize_video_embed(url: &str) -> String {
    if url.contains(WATCH_MARKER) {
        url.replacen("watch?v=", "embed/", 1)
    } else if url.contains(SHORT_MARKER) {
        url.replacen(SHORT_MARKER, "youtube.com/embed/", 1)
    } else {
        url.to_string()
    }
}
