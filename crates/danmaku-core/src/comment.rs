// crates/danmaku-core/src/comment.rs
//
// Comment types at the boundary with the comment source.
//
//   CommentRecord     wire shape, as delivered by the source (seconds, hex color).
//   CommentEvent      engine shape (integer millis, parsed color). Immutable.
//   EpisodeComments   the source delivers comments grouped by episode number.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::color::{parse_color, Rgba};
use crate::helpers::time::secs_to_millis;

fn default_color() -> String { "#FFFFFF".to_string() }

/// One comment exactly as the source hands it over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub text:  String,
    /// Offset from the start of the video, in seconds.
    pub time:  f64,
    #[serde(default = "default_color")]
    pub color: String,
}

/// A comment ready for the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentEvent {
    pub text:              String,
    pub start_time_millis: i64,
    pub color:             Rgba,
}

impl From<&CommentRecord> for CommentEvent {
    fn from(rec: &CommentRecord) -> Self {
        Self {
            text:              rec.text.clone(),
            start_time_millis: secs_to_millis(rec.time),
            color:             parse_color(&rec.color),
        }
    }
}

impl From<CommentRecord> for CommentEvent {
    fn from(rec: CommentRecord) -> Self {
        Self {
            start_time_millis: secs_to_millis(rec.time),
            color:             parse_color(&rec.color),
            text:              rec.text,
        }
    }
}

/// Comments keyed by episode number as a decimal string (`"1"`, `"2"`, …).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeComments(pub HashMap<String, Vec<CommentRecord>>);

impl EpisodeComments {
    /// Comments for `episode`, or an empty list when the source has none.
    pub fn comments_for_episode(&self, episode: u32) -> Vec<CommentRecord> {
        self.0.get(&episode.to_string()).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_converts_to_event() {
        let rec = CommentRecord { text: "hi".into(), time: 12.345, color: "#00FF00".into() };
        let ev  = CommentEvent::from(&rec);
        assert_eq!(ev.text, "hi");
        assert_eq!(ev.start_time_millis, 12_345);
        assert_eq!(ev.color, Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn missing_color_defaults_to_white() {
        let rec: CommentRecord = serde_json::from_str(r#"{"text":"a","time":1.5}"#).unwrap();
        assert_eq!(rec.color, "#FFFFFF");
        assert_eq!(CommentEvent::from(rec).color, Rgba::WHITE);
    }

    #[test]
    fn episode_lookup_by_number() {
        let json = r##"{
            "1": [{"text":"first","time":0.0,"color":"#FFF"}],
            "2": [{"text":"second","time":1.0,"color":"#FFF"},
                  {"text":"third","time":2.0,"color":"#FFF"}]
        }"##;
        let map: EpisodeComments = serde_json::from_str(json).unwrap();
        assert_eq!(map.comments_for_episode(2).len(), 2);
        assert_eq!(map.comments_for_episode(1)[0].text, "first");
        assert!(map.comments_for_episode(7).is_empty());
    }
}
