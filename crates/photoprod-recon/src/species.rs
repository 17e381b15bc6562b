/// Proton rest mass in GeV/c^2. Also the default nucleon mass for beam energies.
pub const PROTON_MASS: f64 = 0.93827208816;

/// Electron rest mass in GeV/c^2.
pub const ELECTRON_MASS: f64 = 0.00051099895;

/// Muon rest mass in GeV/c^2.
pub const MUON_MASS: f64 = 0.1056583755;

/// Charged pion rest mass in GeV/c^2.
pub const PION_MASS: f64 = 0.139570390983681;

/// Charged kaon rest mass in GeV/c^2.
pub const KAON_MASS: f64 = 0.49367659945804093;

/// Returns the rest mass in GeV/c^2 for a PDG particle code.
///
/// Antiparticles share the mass of their particle, so only the magnitude of
/// `code` is consulted. Codes outside the table are treated as massless.
pub fn species_mass(code: i64) -> f64 {
    match code.unsigned_abs() {
        11 => ELECTRON_MASS,
        13 => MUON_MASS,
        211 => PION_MASS,
        321 => KAON_MASS,
        2212 => PROTON_MASS,
        _ => 0.0,
    }
}

/// Whether `code` (or its antiparticle) has an entry in the mass table.
pub fn is_known_species(code: i64) -> bool {
    matches!(code.unsigned_abs(), 11 | 13 | 211 | 321 | 2212)
}
