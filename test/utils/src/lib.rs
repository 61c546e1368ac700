/// A submission long enough to get a derived summary.
pub fn long_text_fixture() -> &'static str {
    return "The museum opens at nine in the morning and the guided tour starts half an hour later, so there is plenty of time to grab a coffee at the corner bakery before walking over. Bring a jacket though, the main hall gets surprisingly cold once the air conditioning kicks in."
        .trim();
}
