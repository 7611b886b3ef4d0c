use serde::{Deserialize, Serialize};

/// One documented piece of partner feedback.
///
/// Records are immutable once defined and live in a fixed ordered sequence;
/// the order is display-relevant (it determines the `#` column in both
/// outputs). Records relate to each other only through a shared
/// [`prototype`](Self::prototype) label, and that grouping is computed at
/// render time — it is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Short feature name, e.g. "Prompt Efficiency Metrics".
    pub feature: String,
    /// One-sentence description of what the feature does.
    pub short_description: String,
    /// The prototype (or cross-cutting category) the feedback targets,
    /// e.g. "Magic Mirror (Prototype 1)".
    pub prototype: String,
    /// Free-text context: rationale, constraints, partner quotes.
    pub notes: String,
    /// Who suggested the feature.
    pub suggested_by: String,
}

impl FeatureRecord {
    pub fn new(
        feature: impl Into<String>,
        short_description: impl Into<String>,
        prototype: impl Into<String>,
        notes: impl Into<String>,
        suggested_by: impl Into<String>,
    ) -> Self {
        Self {
            feature: feature.into(),
            short_description: short_description.into(),
            prototype: prototype.into(),
            notes: notes.into(),
            suggested_by: suggested_by.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_fields() {
        let record = FeatureRecord::new(
            "QR Codes for Resources",
            "Quick access to detailed information via QR codes",
            "Magic Mirror (Prototype 1)",
            "Bridges physical display with digital resources",
            "Moses",
        );

        let json = serde_json::to_value(&record).expect("serialization failed");
        assert_eq!(json["feature"], "QR Codes for Resources");
        assert_eq!(json["prototype"], "Magic Mirror (Prototype 1)");
        assert_eq!(json["suggested_by"], "Moses");
    }
}
