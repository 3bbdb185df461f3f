//! Compiled-in ZH -> 2l2tau candidate events.
//!
//! Rows before the `emmt` block are the selected candidates; the `emmt` rows
//! are anti-isolated control events.

use crate::data::EventRecord;

/// Candidate events in selection order.
pub const ZH_CANDIDATES: &[EventRecord] = &[
    EventRecord::new("mmet", 171178, 12, 11119024),
    EventRecord::new("mmet", 161217, 396, 346679510),
    EventRecord::new("mmmt", 172014, 58, 91568080),
    EventRecord::new("mmmt", 177139, 143, 226464086),
    EventRecord::new("mmmt", 172635, 159, 238215970),
    EventRecord::new("mmme", 179889, 195, 291267852),
    EventRecord::new("mmme", 177184, 10, 12646620),
    EventRecord::new("eett", 178871, 535, 721402028),
    EventRecord::new("eett", 178100, 335, 455090581),
    EventRecord::new("eeet", 172252, 40, 47105541),
    EventRecord::new("eeet", 177718, 469, 736335702),
    EventRecord::new("eeet", 163659, 355, 269046597),
    EventRecord::new("mmmt", 171050, 643, 821417992),
    EventRecord::new("mmmt", 179434, 371, 641824424),
    EventRecord::new("mmmt", 179889, 78, 81028181),
    EventRecord::new("mmmt", 179889, 168, 235516917),
    EventRecord::new("mmmt", 175975, 360, 515584039),
    EventRecord::new("mmmt", 176201, 271, 421507855),
    EventRecord::new("mmmt", 176467, 146, 226304277),
    EventRecord::new("mmmt", 177718, 788, 1263752726),
    EventRecord::new("mmmt", 177730, 189, 264203514),
    EventRecord::new("mmmt", 178098, 32, 42470279),
    EventRecord::new("mmmt", 166512, 1063, 1231425135),
    EventRecord::new("mmmt", 166841, 62, 66008312),
    EventRecord::new("mmmt", 167281, 272, 346878062),
    EventRecord::new("mmmt", 167786, 107, 126622509),
    // anti-isolated control events
    EventRecord::new("emmt", 175886, 5, 1870597),
    EventRecord::new("emmt", 179563, 55, 87859459),
    EventRecord::new("emmt", 179563, 177, 287281642),
    EventRecord::new("emmt", 180076, 160, 291127256),
    EventRecord::new("emmt", 175975, 118, 124381600),
    EventRecord::new("emmt", 176286, 453, 667146038),
    EventRecord::new("emmt", 176807, 70, 103029014),
    EventRecord::new("emmt", 176886, 107, 167886668),
    EventRecord::new("emmt", 176933, 158, 258632028),
    EventRecord::new("emmt", 177139, 450, 730289557),
    EventRecord::new("emmt", 177183, 55, 83303116),
    EventRecord::new("emmt", 177201, 538, 778484323),
    EventRecord::new("emmt", 177718, 451, 707697062),
    EventRecord::new("emmt", 178365, 797, 1304368590),
    EventRecord::new("emmt", 178479, 67, 52217115),
    EventRecord::new("emmt", 161312, 159, 66046330),
    EventRecord::new("emmt", 163760, 142, 99809895),
    EventRecord::new("emmt", 165472, 143, 166392313),
    EventRecord::new("emmt", 165548, 252, 345446051),
    EventRecord::new("emmt", 165993, 1447, 1526558733),
    EventRecord::new("emmt", 166049, 613, 814346788),
    EventRecord::new("emmt", 166380, 682, 765067202),
    EventRecord::new("emmt", 166438, 373, 430705128),
    EventRecord::new("emmt", 166841, 41, 42157067),
    EventRecord::new("emmt", 167102, 109, 113554882),
    EventRecord::new("emmt", 167674, 123, 151560437),
    EventRecord::new("emmt", 172865, 211, 328047902),
    EventRecord::new("emmt", 172791, 508, 702201840),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::classify::{PrimaryDataset, classify};

    #[test]
    fn table_uses_only_lepton_and_tau_legs() {
        for record in ZH_CANDIDATES {
            assert!(
                record.final_state.chars().all(|ch| matches!(ch, 'e' | 'm' | 't')),
                "unexpected leg in {}",
                record.final_state
            );
        }
    }

    #[test]
    fn every_candidate_has_a_trigger_stream() {
        for record in ZH_CANDIDATES {
            assert_ne!(classify(record.final_state), PrimaryDataset::Unclassified);
        }
    }

    #[test]
    fn candidate_events_are_unique() {
        let ids: HashSet<_> = ZH_CANDIDATES.iter().map(|record| record.id()).collect();
        assert_eq!(ids.len(), ZH_CANDIDATES.len());
    }
}
