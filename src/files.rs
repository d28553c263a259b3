//! The fixed input file names.
//!
//! The figure is produced from a directory of fixed-name datasets; every
//! name is listed here, next to the helper that joins it to the data
//! directory. Tables are whitespace text in the shapes described by
//! `carbonfig_core::io`.

use carbonfig_core::scenario::Scenario;
use std::path::{Path, PathBuf};

/// Historical concentration-driven CO2 record (year, ppm), one header line.
pub const CONC_HISTORICAL: &str = "CMIP6_HIST_CO2.dat";
/// SSP concentration-driven CO2 (year + one column per scenario), one header line.
pub const CONC_SSP: &str = "CMIP6_SSP_CO2.dat";
/// Concentration extensions to 2300 (year, ssp126, ssp534, ssp585), one header line.
pub const CONC_SSP_2300: &str = "CMIP6_SSP2300_CO2.dat";
/// Emissions-driven CO2 spread (year, mean, p5, p95), one header line.
pub const CONC_EMISSIONS_DRIVEN: &str = "CMIP6_e-CO2.dat";

/// Historical land-use emissions (year, kg C yr⁻¹), no header.
pub const LANDUSE_HISTORICAL: &str = "CMIP6_C4MIP_landuse_emissions.dat";

/// Optional coastline polylines (lon, lat), segments separated by NaN rows.
pub const COASTLINES: &str = "coastlines.dat";

/// Earth-system models with simulations extended to 2300.
pub const ESM_MODELS: [&str; 4] = ["CanESM5", "IPSL-CM6A-LR", "UKESM1-0-LL", "CESM2-WACCM"];

/// Number of members in the emissions-driven concentration ensemble,
/// annotated on the concentration panel.
pub const EMISSIONS_DRIVEN_COUNT: usize = 10;

pub fn path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// MAGICC emissions-driven concentration ensemble for one scenario.
pub fn magicc_concentrations(dir: &Path, scenario: Scenario) -> PathBuf {
    let tag = match scenario {
        Scenario::Ssp534Over => "ssp534-over".to_string(),
        other => other.key().to_string(),
    };
    dir.join(format!("MAGICCv7.5.1_atmospheric-co2_esm-{}.dat", tag))
}

/// Global-total ocean CO2 flux members (year + one column per model).
pub fn ocean_flux(dir: &Path, scenario: Scenario) -> PathBuf {
    dir.join(format!(
        "global_total_FGCO2_GtC_yr_{}.txt",
        scenario.file_tag()
    ))
}

/// Global-total net biome production members (year + one column per model).
pub fn land_flux(dir: &Path, scenario: Scenario) -> PathBuf {
    dir.join(format!(
        "global_total_NBP_GtC_yr_{}.txt",
        scenario.file_tag()
    ))
}

/// Diagnosed fossil-fuel emissions members (year + one column per model).
pub fn fossil_emissions(dir: &Path, scenario: Scenario) -> PathBuf {
    dir.join(format!("ffEms{}_GtCyr.txt", scenario.file_tag()))
}

/// Per-model land flux to 2300 (year, ssp126, ssp534, ssp585), no header.
pub fn esm_land_flux(dir: &Path, model: &str) -> PathBuf {
    dir.join(format!("{}_nbp.dat", model))
}

/// Per-model ocean flux to 2300 (year, ssp126, ssp534, ssp585), no header.
pub fn esm_ocean_flux(dir: &Path, model: &str) -> PathBuf {
    dir.join(format!("{}_fgco2.dat", model))
}

/// One exported field of the carbon feedback parameter analysis.
///
/// Maps (`*_ensmean`, `*_fraction_sign_agreement`) are gridded tables;
/// zonal profiles (`*_zonalmean_ensmean`, `*_zonalmean_ensstd`) are
/// two-column (lat, value) tables.
pub fn feedback_field(dir: &Path, field: &str) -> PathBuf {
    dir.join(format!("carbon_feedback_{}.dat", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_tokens_land_in_file_names() {
        let dir = Path::new("/data");
        assert_eq!(
            ocean_flux(dir, Scenario::Ssp534Over),
            Path::new("/data/global_total_FGCO2_GtC_yr_HistoricalSsp534os.txt")
        );
        assert_eq!(
            fossil_emissions(dir, Scenario::Ssp119),
            Path::new("/data/ffEmsHistoricalSsp119_GtCyr.txt")
        );
        assert_eq!(
            magicc_concentrations(dir, Scenario::Ssp534Over),
            Path::new("/data/MAGICCv7.5.1_atmospheric-co2_esm-ssp534-over.dat")
        );
        assert_eq!(
            magicc_concentrations(dir, Scenario::Ssp126),
            Path::new("/data/MAGICCv7.5.1_atmospheric-co2_esm-ssp126.dat")
        );
    }

    #[test]
    fn esm_files_follow_the_model_name() {
        let dir = Path::new("/data");
        assert_eq!(
            esm_land_flux(dir, "CanESM5"),
            Path::new("/data/CanESM5_nbp.dat")
        );
        assert_eq!(
            esm_ocean_flux(dir, "CESM2-WACCM"),
            Path::new("/data/CESM2-WACCM_fgco2.dat")
        );
    }

    #[test]
    fn feedback_fields_share_a_prefix() {
        let dir = Path::new("/d");
        assert_eq!(
            feedback_field(dir, "beta_ensmean"),
            Path::new("/d/carbon_feedback_beta_ensmean.dat")
        );
    }
}
