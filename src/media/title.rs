//! Title cleanup for mediasort
//!
//! Scene titles scraped from catalogues often end with the names of the
//! performing actors. This module strips such a trailing run of names.

use crate::config::TITLE_ACTOR_DELIMITERS;
use log::debug;
use regex::Regex;

/// Removes a trailing run of actor names from a title
///
/// A run is one or more groups of 1 to 3 delimiter characters directly
/// followed by one of `actors`. Actors are matched literally and
/// case-sensitively; when names overlap, the earlier one in `actors` is tried
/// first. The kept prefix is the shortest one for which the rest of the title
/// is such a run.
///
/// # Arguments
/// * `title` - The title to clean up
/// * `actors` - Known actor names
///
/// # Returns
/// Returns the title without the trailing names, or the title unchanged if
/// it does not end with any of them
pub fn remove_trailing_actors<S: AsRef<str>>(title: &str, actors: &[S]) -> String {
    let Some(pattern) = trailing_actors_pattern(actors) else {
        return title.to_string();
    };

    match pattern.captures(title) {
        Some(captures) => {
            let kept = captures.get(1).map_or("", |m| m.as_str());
            let removed = captures.get(2).map_or("", |m| m.as_str());
            debug!("Removed trailing actors from title: '{kept}'[{removed}]");
            kept.to_string()
        }
        None => title.to_string(),
    }
}

/// Builds the matcher for a trailing run of `actors`
///
/// Returns `None` when there is nothing to match against.
fn trailing_actors_pattern<S: AsRef<str>>(actors: &[S]) -> Option<Regex> {
    let alternatives: Vec<String> = actors
        .iter()
        .filter_map(|actor| {
            let actor: &str = actor.as_ref();
            (!actor.is_empty()).then(|| regex::escape(actor))
        })
        .collect();
    if alternatives.is_empty() {
        return None;
    }

    let delimiters = regex::escape(TITLE_ACTOR_DELIMITERS);
    let source = format!(
        "^(.*?)((?:[{delimiters}]{{1,3}}(?:{}))+)$",
        alternatives.join("|")
    );

    match Regex::new(&source) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            debug!("Cannot build trailing actor pattern: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_single_trailing_actor() {
        assert_eq!(
            remove_trailing_actors("SceneTitle-ActorA", &["ActorA"]),
            "SceneTitle"
        );
    }

    #[test]
    fn test_title_without_actor_is_unchanged() {
        assert_eq!(
            remove_trailing_actors("SceneTitle", &["ActorA"]),
            "SceneTitle"
        );
        assert_eq!(
            remove_trailing_actors("ActorA plays SceneTitle", &["ActorA"]),
            "ActorA plays SceneTitle"
        );
    }

    #[test]
    fn test_remove_multiple_trailing_actors() {
        assert_eq!(
            remove_trailing_actors("Title&ActorA,ActorB", &["ActorA", "ActorB"]),
            "Title"
        );
        assert_eq!(
            remove_trailing_actors("Title ActorB x ActorA", &["ActorA", "ActorB"]),
            "Title"
        );
    }

    #[test]
    fn test_remove_full_width_delimiters() {
        let actors = vec!["演员甲".to_string(), "演员乙".to_string()];
        assert_eq!(remove_trailing_actors("标题　演员甲＆演员乙", &actors), "标题");
        assert_eq!(remove_trailing_actors("标题・演员乙", &actors), "标题");
    }

    #[test]
    fn test_delimiter_run_is_limited() {
        assert_eq!(
            remove_trailing_actors("Title----ActorA", &["ActorA"]),
            "Title-"
        );
    }

    #[test]
    fn test_actor_without_delimiter_is_kept() {
        assert_eq!(
            remove_trailing_actors("TitleActorA", &["ActorA"]),
            "TitleActorA"
        );
    }

    #[test]
    fn test_earlier_occurrence_is_kept() {
        assert_eq!(
            remove_trailing_actors("ActorA-Title-ActorA", &["ActorA"]),
            "ActorA-Title"
        );
    }

    #[test]
    fn test_overlapping_actor_names() {
        assert_eq!(
            remove_trailing_actors("Title-AnnaMaria", &["Anna", "AnnaMaria"]),
            "Title"
        );
        assert_eq!(
            remove_trailing_actors("Title-Anna", &["AnnaMaria", "Anna"]),
            "Title"
        );
    }

    #[test]
    fn test_actor_names_are_literal() {
        assert_eq!(remove_trailing_actors("Title-AxB", &["A.B"]), "Title-AxB");
        assert_eq!(remove_trailing_actors("Title-A.B", &["A.B"]), "Title");
        assert_eq!(remove_trailing_actors("Title (Sora)", &["(Sora)"]), "Title");
        assert_eq!(remove_trailing_actors("Title-C++", &["C++"]), "Title");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(
            remove_trailing_actors("Title-actora", &["ActorA"]),
            "Title-actora"
        );
    }

    #[test]
    fn test_empty_actor_list() {
        let actors: [&str; 0] = [];
        assert_eq!(remove_trailing_actors("Title-", &actors), "Title-");
        assert_eq!(remove_trailing_actors("Title-", &[""]), "Title-");
    }

    #[test]
    fn test_trimming_is_idempotent() {
        let actors = ["ActorA", "ActorB"];
        for title in ["Title&ActorA,ActorB", "SceneTitle-ActorA", "Plain title"] {
            let once = remove_trailing_actors(title, &actors);
            assert_eq!(remove_trailing_actors(&once, &actors), once);
        }
    }
}
