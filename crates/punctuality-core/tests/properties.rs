//! Property tests for whole-batch behavior.

use proptest::prelude::*;
use punctuality_core::process_batch;
use punctuality_model::{RawLine, RecordError, ReferenceTopology};

/// (stop, line, vehicle) triples registered in the built-in topology.
const MEMBERS: &[(u32, u32, u32)] = &[
    (5, 102, 201),
    (10, 110, 753),
    (15, 57, 56),
    (25, 22, 6532),
    (35, 147, 234),
    (45, 57, 89),
];

prop_compose! {
    fn valid_line()(
        member in prop::sample::select(MEMBERS),
        day in 1u32..=28,
        month in 1u32..=12,
        year in 2000u32..2100,
        times in prop::array::uniform3((0u32..24, 0u32..60)),
    ) -> (String, i64, i64) {
        let (stop, line, vehicle) = member;
        let [(sh, sm), (ah, am), (dh, dm)] = times;
        let text = format!(
            "{stop};{line};{vehicle};{day:02}.{month:02}.{year};{sh:02}:{sm:02};{ah:02}:{am:02};{dh:02}:{dm:02}"
        );
        let minutes = |h: u32, m: u32| i64::from(h * 60 + m);
        let delay = (minutes(ah, am) - minutes(sh, sm)) * 60;
        let layover = (minutes(dh, dm) - minutes(ah, am)) * 60;
        (text, delay, layover)
    }
}

proptest! {
    /// Valid member lines are accepted with exact second differences
    #[test]
    fn valid_lines_are_accepted(lines in prop::collection::vec(valid_line(), 1..20)) {
        let raw = RawLine::numbered(lines.iter().map(|(text, _, _)| text.clone()));
        let outcome = process_batch(raw, &ReferenceTopology::builtin());

        prop_assert!(outcome.rejected.is_empty());
        prop_assert_eq!(outcome.accepted.len(), lines.len());
        for (enriched, (_, delay, layover)) in outcome.accepted.iter().zip(&lines) {
            prop_assert_eq!(enriched.delay_seconds, *delay);
            prop_assert_eq!(enriched.layover_seconds, *layover);
        }
    }

    /// Lines without exactly seven fields are rejected verbatim
    #[test]
    fn wrong_field_counts_are_rejected_verbatim(
        fields in prop::collection::vec("[0-9:.]{0,4}", 1..12)
            .prop_filter("not seven fields", |fields| fields.len() != 7)
    ) {
        let text = fields.join(";");
        let outcome = process_batch(
            vec![RawLine::new(1, text.clone())],
            &ReferenceTopology::builtin(),
        );

        prop_assert!(outcome.accepted.is_empty());
        prop_assert_eq!(outcome.rejected.len(), 1);
        prop_assert_eq!(&outcome.rejected[0].raw, &text);
        prop_assert_eq!(
            &outcome.rejected[0].error,
            &RecordError::MalformedFieldCount { found: fields.len() }
        );
    }
}
