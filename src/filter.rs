use crate::models::StationRecord;

/// Lower-case substrings that mark a station as music-oriented.
pub const GENRE_KEYWORDS: &[&str] = &[
    "music", "pop", "hits", "rock", "jazz", "classical", "音乐", "流行", "top40", "dance", "rnb",
    "lofi",
];

pub fn is_music_station<S: AsRef<str>>(station: &StationRecord, keywords: &[S]) -> bool {
    let tags = station.tags_lowercase();
    keywords.iter().any(|k| tags.contains(k.as_ref()))
}

/// Keep matching stations in response order, capped at `max`.
///
/// Also returns how many stations matched before the cap.
pub fn select_presets<S: AsRef<str>>(
    stations: Vec<StationRecord>,
    keywords: &[S],
    max: usize,
) -> (Vec<StationRecord>, usize) {
    let mut matched = 0;
    let mut presets = Vec::with_capacity(max.min(stations.len()));
    for st in stations {
        if !is_music_station(&st, keywords) {
            continue;
        }
        matched += 1;
        if presets.len() < max {
            presets.push(st);
        }
    }
    (presets, matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn station(name: &str, tags: &str) -> StationRecord {
        serde_json::from_value(json!({ "name": name, "tags": tags })).unwrap()
    }

    #[test]
    fn matches_latin_and_cjk_keywords() {
        let stations = vec![
            station("a", "Pop Hits"),
            station("b", "news,talk"),
            station("c", "流行音乐"),
        ];
        let (picked, matched) = select_presets(stations, GENRE_KEYWORDS, 20);
        let names: Vec<_> = picked.iter().filter_map(|s| s.name()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(matched, 2);
    }

    #[test]
    fn untagged_station_is_dropped() {
        let st: StationRecord = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert!(!is_music_station(&st, GENRE_KEYWORDS));
    }

    #[test]
    fn keeps_first_matches_in_order() {
        let stations: Vec<_> = (0..30)
            .map(|i| {
                let tags = if i % 3 == 0 { "talk" } else { "ROCK" };
                station(&i.to_string(), tags)
            })
            .collect();
        let (picked, matched) = select_presets(stations, GENRE_KEYWORDS, 20);
        assert_eq!(picked.len(), 20);
        assert_eq!(matched, 20);

        let expected: Vec<String> = (0..30)
            .filter(|i| i % 3 != 0)
            .take(20)
            .map(|i: i32| i.to_string())
            .collect();
        let names: Vec<String> = picked.iter().filter_map(|s| s.name()).map(String::from).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let (picked, matched) = select_presets(vec![], GENRE_KEYWORDS, 20);
        assert!(picked.is_empty());
        assert_eq!(matched, 0);
    }
}
