use super::Verb;

/// Case-insensitive substring match. An empty query matches everything.
pub fn text_matches_search(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

pub fn matches_search(verb: &Verb, query: &str) -> bool {
    text_matches_search(&verb.infinitive, query) || text_matches_search(&verb.translation, query)
}

pub fn filter_verbs<'a>(verbs: &'a [Verb], query: &str) -> Vec<&'a Verb> {
    verbs.iter().filter(|verb| matches_search(verb, query)).collect()
}
