use super::TrackInfo;

/// Picks the caption track to use
///
/// Preferred languages are tried in order; for each one a manual track wins
/// over a generated one. Without a match the first manual track in any
/// language is used, then the first generated one.
pub fn select_track<'a>(tracks: &'a [TrackInfo], preferred: &[String]) -> Option<&'a TrackInfo> {
    let find = |language: &str, generated: bool| {
        tracks
            .iter()
            .find(|track| track.generated == generated && track.language_code == language)
    };

    preferred
        .iter()
        .find_map(|language| {
            find(language.as_str(), false).or_else(|| find(language.as_str(), true))
        })
        .or_else(|| tracks.iter().find(|track| !track.generated))
        .or_else(|| tracks.iter().find(|track| track.generated))
}
