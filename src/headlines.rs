//! Satirical headlines built from whatever is trending today.
//!
//! Trending titles are normalised, deduplicated, and stripped of the featured
//! title. Six of them are drawn and slotted into six fixed templates, then four
//! of the assembled stories are drawn for the page. Both draws come from the
//! same date-seeded stream, in that order.

use crate::models::{FeedEntry, Headline};
use crate::rng::Mulberry32;
use crate::selection::pick_n;
use crate::utils::normalize_title;
use itertools::Itertools;
use tracing::{debug, instrument};

/// Trending titles drawn for the templates.
pub const CANDIDATE_COUNT: usize = 6;
/// Stories that make it onto the page.
pub const HEADLINE_COUNT: usize = 4;

/// Normalised titles to sample from, in feed order.
///
/// Duplicates and the featured title are removed. If that leaves nothing, the
/// raw normalised titles are used instead so the page still has material.
pub fn candidate_titles(entries: &[FeedEntry], featured_title: &str) -> Vec<String> {
    let titles: Vec<String> = entries
        .iter()
        .map(|e| normalize_title(&e.title))
        .filter(|t| !t.is_empty())
        .collect();

    let distinct: Vec<String> = titles
        .iter()
        .unique()
        .filter(|t| t.as_str() != featured_title)
        .cloned()
        .collect();

    if distinct.is_empty() { titles } else { distinct }
}

/// Slot `picked` titles into the six templates.
///
/// A missing slot borrows the featured title, and failing that a canned phrase.
pub fn assemble(picked: &[String], featured_title: &str, date: &str) -> Vec<Headline> {
    let t = |i: usize, fallback: &str| -> String {
        match picked.get(i) {
            Some(title) if !title.is_empty() => title.clone(),
            _ if !featured_title.is_empty() => featured_title.to_string(),
            _ => fallback.to_string(),
        }
    };

    let story = |headline: String, body: String| Headline { headline, body };

    vec![
        story(
            format!("BREAKING: “{}”", t(0, "Cat Declares Independence From Gravity")),
            format!(r#"Officials confirm this is being treated as a "meow-jor" development. (Filed: {date})"#),
        ),
        story(
            format!("Markets React To: {}", t(1, "Human Opens Can; Civilization Restored")),
            "Treat futures up. Productivity down. The couch remains occupied.".to_string(),
        ),
        story(
            format!("Opinion: {} (And You Know It)", t(2, "Your Keyboard Was Always A Heated Bed")),
            "Experts urge humans to stop taking it personally and start providing snacks.".to_string(),
        ),
        story(
            format!("Science Desk Investigates: {}", t(3, "The Mystery Of The 0.7% Empty Bowl")),
            "The peer review process consisted of one stare, two slow blinks, and a decisive nap."
                .to_string(),
        ),
        story(
            format!("Exclusive: Government Announces New Standard: “{}\"", t(4, "If It Fits, It Sits")),
            "Applies to boxes, laundry baskets, and your freshly folded clothes (especially those)."
                .to_string(),
        ),
        story(
            format!("Weather Alert: {}", t(5, "Chance Of Zoomies After Midnight")),
            "Residents advised to secure fragile objects and prepare for hallway drag races."
                .to_string(),
        ),
    ]
}

/// Draw candidates, fill the templates, and draw the published stories.
///
/// `date` is the ISO calendar date stamped into the first template's body.
#[instrument(level = "info", skip(entries, rng), fields(entries = entries.len()))]
pub fn build_headlines(
    entries: &[FeedEntry],
    featured_title: &str,
    date: &str,
    rng: &mut Mulberry32,
) -> Vec<Headline> {
    let pool = candidate_titles(entries, featured_title);
    let picked = pick_n(&pool, CANDIDATE_COUNT, || rng.next_f64());
    debug!(pool = pool.len(), picked = ?picked, "Picked trending titles");

    let stories = assemble(&picked, featured_title, date);
    pick_n(&stories, HEADLINE_COUNT, || rng.next_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FALLBACK_TITLE;

    fn entry(title: &str) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            permalink: format!("https://www.reddit.com/r/Catmemes/comments/{}", title.len()),
            author: String::new(),
        }
    }

    fn eight_entries() -> Vec<FeedEntry> {
        [
            "Loaf", "Zoomies", "Box", "Knocked it over", "Blep", "Mlem", "Void", "Sunbeam",
        ]
        .into_iter()
        .map(entry)
        .collect()
    }

    #[test]
    fn test_candidates_dedupe_normalise_and_exclude_featured() {
        let entries = vec![
            entry("Loaf  mode"),
            entry("Loaf mode"),
            entry("Featured cat"),
            entry(" Zoomies\n"),
        ];
        assert_eq!(
            candidate_titles(&entries, "Featured cat"),
            vec!["Loaf mode".to_string(), "Zoomies".to_string()]
        );
    }

    #[test]
    fn test_candidates_fall_back_to_raw_titles() {
        let entries = vec![entry("Only story"), entry("Only story")];
        assert_eq!(
            candidate_titles(&entries, "Only story"),
            vec!["Only story".to_string(), "Only story".to_string()]
        );
    }

    #[test]
    fn test_assemble_fills_missing_slots_with_featured_title() {
        let stories = assemble(&["Loaf".to_string()], "Featured", "2024-01-01");
        assert_eq!(stories.len(), 6);
        assert_eq!(stories[0].headline, "BREAKING: “Loaf”");
        assert!(stories[0].body.ends_with("(Filed: 2024-01-01)"));
        assert_eq!(stories[5].headline, "Weather Alert: Featured");
    }

    #[test]
    fn test_assemble_uses_canned_phrases_as_last_resort() {
        let stories = assemble(&[], "", "2024-01-01");
        assert_eq!(stories[1].headline, "Markets React To: Human Opens Can; Civilization Restored");
        assert_eq!(
            stories[4].headline,
            "Exclusive: Government Announces New Standard: “If It Fits, It Sits\""
        );
    }

    #[test]
    fn test_build_headlines_reference_selection() {
        // Seed 20240101 draws candidates [4,2,3,7,0,6] then stories [5,2,1,0].
        let mut rng = Mulberry32::new(20240101);
        let headlines = build_headlines(&eight_entries(), FALLBACK_TITLE, "2024-01-01", &mut rng);
        let titles: Vec<&str> = headlines.iter().map(|h| h.headline.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Weather Alert: Void",
                "Opinion: Knocked it over (And You Know It)",
                "Markets React To: Box",
                "BREAKING: “Blep”",
            ]
        );
    }

    #[test]
    fn test_build_headlines_is_stable_for_same_seed() {
        let entries = eight_entries();
        let first = build_headlines(&entries, "x", "2024-05-05", &mut Mulberry32::new(20240505));
        let second = build_headlines(&entries, "x", "2024-05-05", &mut Mulberry32::new(20240505));
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_headlines_with_no_entries_still_publishes_four() {
        let mut rng = Mulberry32::new(20240101);
        let headlines = build_headlines(&[], FALLBACK_TITLE, "2024-01-01", &mut rng);
        assert_eq!(headlines.len(), HEADLINE_COUNT);
        assert!(headlines.iter().all(|h| h.headline.contains(FALLBACK_TITLE)));
    }

    #[test]
    fn test_build_headlines_never_repeats_a_story() {
        let mut rng = Mulberry32::new(20241231);
        let headlines = build_headlines(&eight_entries(), "x", "2024-12-31", &mut rng);
        assert_eq!(headlines.iter().unique().count(), headlines.len());
    }
}
