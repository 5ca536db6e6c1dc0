// crates/danmaku-source/src/load.rs
//
// Reads comment files from disk.
//
// Two layouts are accepted:
//   { "1": [ {text, time, color}, ... ], "2": [...] }     per-episode map
//   [ {text, time, color}, ... ]                          one flat list
//
// A flat list is the same for every episode. A map with no entry for the
// requested episode yields an empty list, not an error.

use std::path::Path;
use anyhow::{Context, Result};
use serde::Deserialize;
use danmaku_core::comment::{CommentEvent, CommentRecord, EpisodeComments};

#[derive(Deserialize)]
#[serde(untagged)]
enum CommentFile {
    Flat(Vec<CommentRecord>),
    Episodes(EpisodeComments),
}

impl CommentFile {
    fn into_episode(self, episode: u32) -> Vec<CommentRecord> {
        match self {
            CommentFile::Flat(records)  => records,
            CommentFile::Episodes(map)  => map.comments_for_episode(episode),
        }
    }
}

/// Parse comment JSON and pick out `episode`.
pub fn parse_comments(json: &str, episode: u32) -> Result<Vec<CommentEvent>> {
    let file: CommentFile = serde_json::from_str(json)
        .context("comment file is neither an episode map nor a comment list")?;
    Ok(file.into_episode(episode).into_iter().map(CommentEvent::from).collect())
}

/// Read and parse the comment file at `path`.
pub fn load_comments(path: &Path, episode: u32) -> Result<Vec<CommentEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read comment file {}", path.display()))?;
    parse_comments(&text, episode)
        .with_context(|| format!("bad comment file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use danmaku_core::color::Rgba;

    #[test]
    fn flat_list_ignores_episode() {
        let json = r##"[{"text":"a","time":1.0,"color":"#F00"},{"text":"b","time":0.5}]"##;
        let comments = parse_comments(json, 42).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].start_time_millis, 1_000);
        assert_eq!(comments[0].color, Rgba::opaque(255, 0, 0));
        assert_eq!(comments[1].color, Rgba::WHITE);
    }

    #[test]
    fn episode_map_picks_requested_episode() {
        let json = r##"{"1":[{"text":"one","time":0.0,"color":"#FFF"}],
                        "3":[{"text":"three","time":2.5,"color":"bogus"}]}"##;
        let ep3 = parse_comments(json, 3).unwrap();
        assert_eq!(ep3.len(), 1);
        assert_eq!(ep3[0].text, "three");
        assert_eq!(ep3[0].start_time_millis, 2_500);
        assert_eq!(ep3[0].color, Rgba::WHITE);
        assert!(parse_comments(json, 2).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_comments("{ not json", 1).is_err());
        assert!(parse_comments(r#"{"1": 5}"#, 1).is_err());
    }

    #[test]
    fn load_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r##"[{{"text":"disk","time":3.0,"color":"#00FF00"}}]"##).unwrap();
        let comments = load_comments(f.path(), 1).unwrap();
        assert_eq!(comments[0].text, "disk");
        assert_eq!(comments[0].start_time_millis, 3_000);
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_comments(Path::new("/no/such/comments.json"), 1).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/comments.json"));
    }
}
