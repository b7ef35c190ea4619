//! Coded-value → human-readable label lookups for the enquiry form.
//!
//! Unknown codes fall back to the raw code string so a stale client can
//! never make rendering fail.

const SERVICE_LABELS: &[(&str, &str)] = &[
    ("diaphragm", "Diaphragm Wall"),
    ("topdown", "Top-Down Construction"),
    ("shoring", "Shoring & Piling"),
    ("anchoring", "Soil Anchoring"),
];

const PROPERTY_LABELS: &[(&str, &str)] = &[
    ("commercial", "Commercial"),
    ("metro", "Metro/DMRC"),
    ("hospital", "Hospital"),
    ("underpass", "Underpass"),
    ("residential", "Residential Tower"),
    ("other", "Other"),
];

const TIMELINE_LABELS: &[(&str, &str)] = &[
    ("asap", "As soon as possible"),
    ("2weeks", "Within 2 weeks"),
    ("1month", "Within 1 month"),
    ("3months", "Within 3 months"),
    ("flexible", "Flexible"),
];

const BUDGET_LABELS: &[(&str, &str)] = &[
    ("under50l", "Under ₹50 Lakhs"),
    ("50l-1cr", "₹50 Lakhs - ₹1 Crore"),
    ("1cr-5cr", "₹1 Crore - ₹5 Crore"),
    ("5cr-10cr", "₹5 Crore - ₹10 Crore"),
    ("over10cr", "Over ₹10 Crore"),
    ("unsure", "Not sure yet"),
];

fn lookup<'a>(table: &'a [(&str, &str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(k, _)| *k == code)
        .map_or(code, |(_, v)| *v)
}

pub fn service_label(code: &str) -> &str {
    lookup(SERVICE_LABELS, code)
}

pub fn property_label(code: &str) -> &str {
    lookup(PROPERTY_LABELS, code)
}

pub fn timeline_label(code: &str) -> &str {
    lookup(TIMELINE_LABELS, code)
}

pub fn budget_label(code: &str) -> &str {
    lookup(BUDGET_LABELS, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(service_label("diaphragm"), "Diaphragm Wall");
        assert_eq!(property_label("metro"), "Metro/DMRC");
        assert_eq!(timeline_label("asap"), "As soon as possible");
        assert_eq!(budget_label("unsure"), "Not sure yet");
    }

    #[test]
    fn unknown_code_falls_back_to_raw() {
        assert_eq!(service_label("micropiling"), "micropiling");
        assert_eq!(budget_label(""), "");
    }
}
