//! MML command formatting.

use linkmind_core::models::OffenseKind;

pub(super) fn format_fix(link_id: &str, target_value: u32, kind: OffenseKind) -> String {
    match kind {
        OffenseKind::LicenseHoarding => {
            format!("MOD MWLICENSE: ID={link_id}, CAP={target_value};")
        }
        OffenseKind::SpectrumWaste => {
            format!("MOD MWPORT: ID={link_id}, AM=ENABLE, BW={target_value}MHZ;")
        }
        OffenseKind::ZombiePort => format!("MOD MWPORT: ID={link_id}, ADMIN=DOWN;"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_command_caps_capacity() {
        assert_eq!(
            format_fix("LINK_1", 120, OffenseKind::LicenseHoarding),
            "MOD MWLICENSE: ID=LINK_1, CAP=120;"
        );
    }

    #[test]
    fn bandwidth_command_enables_adaptive_modulation() {
        assert_eq!(
            format_fix("LINK_1", 28, OffenseKind::SpectrumWaste),
            "MOD MWPORT: ID=LINK_1, AM=ENABLE, BW=28MHZ;"
        );
    }

    #[test]
    fn zombie_command_ignores_target() {
        assert_eq!(
            format_fix("LINK_1", 0, OffenseKind::ZombiePort),
            "MOD MWPORT: ID=LINK_1, ADMIN=DOWN;"
        );
    }
}
