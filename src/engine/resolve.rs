// selected name -> school record

use std::borrow::Cow;

use crate::data::School;

/// exact-name lookup; an unknown name yields a record with no curriculum
pub fn resolve<'a>(schools: &'a [School], name: &str) -> Cow<'a, School> {
    match schools.iter().find(|s| s.name == name) {
        Some(school) => Cow::Borrowed(school),
        None => {
            tracing::debug!(name, "no curriculum record");
            Cow::Owned(School::empty(name))
        }
    }
}
