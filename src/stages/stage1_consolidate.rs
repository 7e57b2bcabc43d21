use crate::models::{Cue, Timestamp, Turn};

/// Merge consecutive same-speaker cues into turns.
///
/// Speakers are compared by exact string equality. Two runs by the same
/// speaker separated by anyone else stay separate turns.
pub fn consolidate(cues: &[Cue]) -> Vec<Turn> {
    let mut turns = Vec::new();
    let mut remaining = cues.iter();

    let Some(first) = remaining.next() else {
        return turns;
    };
    let mut current = Turn::from_cue(first);

    for cue in remaining {
        if cue.speaker == current.speaker {
            current.absorb(cue);
        } else {
            let finished = std::mem::replace(&mut current, Turn::from_cue(cue));
            turns.push(finished);
        }
    }

    // Close the final run
    turns.push(current);

    turns
}

/// Per-speaker totals across a consolidated transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerStats {
    pub speaker: String,
    /// Start of the speaker's first turn
    pub first_seen: Timestamp,
    pub turns: usize,
    pub cues: usize,
    pub words: usize,
}

/// Summarize turns by speaker, in order of first appearance
pub fn summarize_speakers(turns: &[Turn]) -> Vec<SpeakerStats> {
    let mut stats: Vec<SpeakerStats> = Vec::new();

    for turn in turns {
        match stats.iter_mut().find(|s| s.speaker == turn.speaker) {
            Some(entry) => {
                entry.turns += 1;
                entry.cues += turn.cue_count;
                entry.words += turn.word_count();
            }
            None => stats.push(SpeakerStats {
                speaker: turn.speaker.clone(),
                first_seen: turn.start.clone(),
                turns: 1,
                cues: turn.cue_count,
                words: turn.word_count(),
            }),
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start: &str, speaker: &str, text: &str) -> Cue {
        Cue::new(Timestamp::parse_prefix(start).unwrap(), speaker, text)
    }

    fn collapse(speakers: impl Iterator<Item = String>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for s in speakers {
            if out.last() != Some(&s) {
                out.push(s);
            }
        }
        out
    }

    #[test]
    fn test_same_speaker_merges() {
        let cues = vec![
            cue("00:00:01.000", "Alice", "Hello"),
            cue("00:00:02.000", "Alice", "world"),
        ];

        let turns = consolidate(&cues);

        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].start.as_str(), "00:00:01.000");
        assert_eq!(turns[0].speaker, "Alice");
        assert_eq!(turns[0].text, "Hello world");
        assert_eq!(turns[0].cue_count, 2);
    }

    #[test]
    fn test_interrupted_runs_stay_separate() {
        let cues = vec![
            cue("00:00:01.000", "Alice", "Hi"),
            cue("00:00:02.000", "Bob", "Hey"),
            cue("00:00:03.000", "Alice", "Bye"),
        ];

        let turns = consolidate(&cues);

        let speakers: Vec<&str> = turns.iter().map(|t| t.speaker.as_str()).collect();
        assert_eq!(speakers, vec!["Alice", "Bob", "Alice"]);
        assert_eq!(turns[2].text, "Bye");
        assert!(turns.iter().all(|t| t.cue_count == 1));
    }

    #[test]
    fn test_empty_input() {
        assert!(consolidate(&[]).is_empty());
        assert!(summarize_speakers(&[]).is_empty());
    }

    #[test]
    fn test_turn_uses_first_timestamp_of_run() {
        let cues = vec![
            cue("00:00:01.000", "Alice", "a"),
            cue("00:00:05.000", "Bob", "b"),
            cue("00:00:06.500", "Bob", "c"),
            cue("00:00:08.000", "Bob", "d"),
        ];

        let turns = consolidate(&cues);

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].start.as_str(), "00:00:05.000");
        assert_eq!(turns[1].text, "b c d");
        assert_eq!(turns[1].cue_count, 3);
    }

    #[test]
    fn test_no_adjacent_equal_speakers_and_order_preserved() {
        let script = [
            ("A", "1"),
            ("A", "2"),
            ("B", "3"),
            ("a", "4"),
            ("a", "5"),
            ("A", "6"),
            ("B", "7"),
            ("B", "8"),
            ("B", "9"),
            ("C", "10"),
        ];
        let cues: Vec<Cue> = script
            .iter()
            .enumerate()
            .map(|(i, (speaker, text))| cue(&format!("00:00:{:02}.000", i), speaker, text))
            .collect();

        let turns = consolidate(&cues);

        for pair in turns.windows(2) {
            assert_ne!(pair[0].speaker, pair[1].speaker);
        }
        assert_eq!(
            collapse(turns.iter().map(|t| t.speaker.clone())),
            collapse(cues.iter().map(|c| c.speaker.clone()))
        );
        assert_eq!(turns.iter().map(|t| t.cue_count).sum::<usize>(), cues.len());
    }

    #[test]
    fn test_summarize_speakers() {
        let cues = vec![
            cue("00:00:01.000", "Alice", "Hi there"),
            cue("00:00:02.000", "Bob", "Hey"),
            cue("00:00:03.000", "Alice", "How are"),
            cue("00:00:04.000", "Alice", "you"),
        ];

        let stats = summarize_speakers(&consolidate(&cues));

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].speaker, "Alice");
        assert_eq!(stats[0].first_seen.as_str(), "00:00:01.000");
        assert_eq!(stats[0].turns, 2);
        assert_eq!(stats[0].cues, 3);
        assert_eq!(stats[0].words, 5);
        assert_eq!(stats[1].speaker, "Bob");
        assert_eq!(stats[1].turns, 1);
    }
}
