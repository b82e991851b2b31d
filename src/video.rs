/// The single course video. The bot only hands out the link and waits for
/// the viewer to confirm that playback reached the end; there is no
/// progress tracking.
pub const COURSE_VIDEO_ID: &str = "dQw4w9WgXcQ";

pub fn watch_url() -> String {
    format!("https://www.youtube.com/watch?v={}", COURSE_VIDEO_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_points_at_the_course_video() {
        assert_eq!(watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
