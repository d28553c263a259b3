//! Dataset ingestion and derived quantities.
//!
//! [`FigureData::load`] reads every input the figure needs and performs
//! the derivation stage: summing land and ocean fluxes per model, aligning
//! the emissions axis, splicing historical and scenario land use, forming
//! cumulative sums and the sink fraction, and reducing every ensemble to a
//! mean plus percentile envelope. The panels consume the result without
//! touching the filesystem again.

use crate::config::FigureConfig;
use crate::errors::{FigureError, FigureResult};
use crate::files;
use carbonfig_core::ensemble::{Ensemble, EnsembleSummary};
use carbonfig_core::errors::{CoreError, CoreResult};
use carbonfig_core::grid::{GriddedField, ZonalProfile};
use carbonfig_core::io::{read_columns, read_ensemble_table, read_gridded};
use carbonfig_core::scenario::Scenario;
use carbonfig_core::timeseries::Timeseries;
use carbonfig_core::units::kg_to_gtc;
use indexmap::IndexMap;
use log::{info, warn};
use ndarray::Array1;
use std::path::{Path, PathBuf};

/// Order in which the concentration lines (and the legend) are drawn:
/// historical first, then high-emission to low-emission pathways.
pub const LINE_ORDER: [Scenario; 7] = [
    Scenario::Historical,
    Scenario::Ssp585,
    Scenario::Ssp370,
    Scenario::Ssp534Over,
    Scenario::Ssp245,
    Scenario::Ssp126,
    Scenario::Ssp119,
];

/// Order of the per-scenario model-count annotations on the flux and
/// sink-fraction panels.
pub const COUNT_ORDER: [Scenario; 6] = [
    Scenario::Ssp119,
    Scenario::Ssp126,
    Scenario::Ssp245,
    Scenario::Ssp370,
    Scenario::Ssp534Over,
    Scenario::Ssp585,
];

/// Scenarios with MAGICC emissions-driven concentration envelopes.
const MAGICC_SCENARIOS: [Scenario; 5] = [
    Scenario::Ssp119,
    Scenario::Ssp126,
    Scenario::Ssp245,
    Scenario::Ssp534Over,
    Scenario::Ssp370,
];

/// Decadal land-use emissions axis shared by all scenario tables.
const LANDUSE_YEARS: [f64; 10] = [
    2015.0, 2020.0, 2030.0, 2040.0, 2050.0, 2060.0, 2070.0, 2080.0, 2090.0, 2100.0,
];

/// Decadal land-use emissions per scenario, GtC yr⁻¹, on [`LANDUSE_YEARS`].
fn landuse_decadal(scenario: Scenario) -> [f64; 10] {
    match scenario {
        Scenario::Ssp119 => [
            0.959301818,
            0.866072041,
            0.101543745,
            0.377358673,
            -0.222296673,
            -0.406504146,
            -0.499712372,
            -0.578721769,
            -0.606262542,
            -0.649481884,
        ],
        Scenario::Ssp126 => [
            0.959301818,
            0.866817094,
            0.05128979,
            -0.105763342,
            -0.479624451,
            -0.705440587,
            -0.704718662,
            -0.664609591,
            -0.568549256,
            -0.790646116,
        ],
        Scenario::Ssp245 => [
            0.959301818,
            0.888927545,
            0.785832615,
            0.590266856,
            0.136613758,
            -0.419976886,
            -0.603051387,
            -0.926548596,
            -1.177396938,
            -1.309111901,
        ],
        Scenario::Ssp370 => [
            0.959301818,
            1.056843235,
            0.959464809,
            0.862338354,
            0.78794353,
            0.857603663,
            0.831412897,
            0.7754469,
            0.699528109,
            0.724396664,
        ],
        Scenario::Ssp534Over => [
            0.959301818,
            1.077263489,
            1.240992571,
            0.936726687,
            0.75137482,
            1.301441248,
            0.68207744,
            0.246490909,
            0.015850909,
            -0.218427273,
        ],
        Scenario::Ssp585 => [
            0.959301818,
            1.077187122,
            1.240056188,
            0.937018695,
            0.55990575,
            0.038017088,
            -0.062708387,
            -0.040323327,
            -0.135100418,
            -0.417359264,
        ],
        Scenario::Historical => unreachable!("no scenario land-use table for the historical record"),
    }
}

/// CO2 concentrations for the concentration panel.
pub struct ConcentrationData {
    /// Concentration-driven lines, in drawing order. The historical
    /// record is bridged to the first scenario year.
    pub driven: IndexMap<Scenario, Timeseries>,
    /// Concentration extensions to 2300 for the extended scenarios.
    pub extended: IndexMap<Scenario, Timeseries>,
    /// Spread of the emissions-driven concentration ensemble.
    pub emissions_driven: EnsembleSummary,
    /// MAGICC emissions-driven envelopes per scenario.
    pub magicc: IndexMap<Scenario, EnsembleSummary>,
}

/// Net land + ocean carbon fluxes for the flux panels.
pub struct FluxData {
    /// Annual flux envelope per scenario, 1850 onwards.
    pub annual: IndexMap<Scenario, EnsembleSummary>,
    /// Number of models behind each scenario's ensemble.
    pub member_counts: IndexMap<Scenario, usize>,
    /// Four-model flux envelope to 2300 for the extended scenarios; the
    /// SSP1-2.6 band is pre-smoothed for display.
    pub extended: IndexMap<Scenario, EnsembleSummary>,
}

/// Sink fraction envelopes per scenario.
pub struct SinkFractionData {
    pub fraction: IndexMap<Scenario, EnsembleSummary>,
}

/// Zonal-mean curve plus its ensemble standard deviation.
pub struct ZonalBand {
    pub mean: ZonalProfile,
    pub std: ZonalProfile,
}

/// Carbon feedback parameter fields for the map row.
pub struct FeedbackMaps {
    pub beta: GriddedField,
    pub gamma: GriddedField,
    pub beta_agreement: GriddedField,
    pub gamma_agreement: GriddedField,
    pub beta_land: ZonalBand,
    pub beta_ocean: ZonalBand,
    pub gamma_land: ZonalBand,
    pub gamma_ocean: ZonalBand,
}

/// Everything the panels draw.
pub struct FigureData {
    pub concentration: ConcentrationData,
    pub flux: FluxData,
    pub sink: SinkFractionData,
    pub feedback: FeedbackMaps,
    /// Coastline polyline segments (lon, lat), if the overlay file exists.
    pub coastlines: Option<Vec<Vec<(f64, f64)>>>,
}

impl FigureData {
    pub fn load(dir: &Path, config: &FigureConfig) -> FigureResult<FigureData> {
        let concentration = load_concentrations(dir, config)?;
        let (flux, sink) = load_fluxes(dir, config)?;
        let feedback = load_feedback(dir)?;
        let coastlines = load_coastlines(dir)?;
        Ok(FigureData {
            concentration,
            flux,
            sink,
            feedback,
            coastlines,
        })
    }
}

fn dataset_err<'a>(
    context: &'a str,
    path: &'a Path,
) -> impl FnOnce(CoreError) -> FigureError + 'a {
    move |source| FigureError::dataset(context, path, source)
}

fn columns(path: &Path, skip: usize, context: &str) -> FigureResult<Vec<Array1<f64>>> {
    read_columns(path, skip).map_err(dataset_err(context, path))
}

fn load_concentrations(dir: &Path, config: &FigureConfig) -> FigureResult<ConcentrationData> {
    let hist_path = files::path(dir, files::CONC_HISTORICAL);
    let hist_cols = columns(&hist_path, 1, "historical CO2 concentrations")?;
    let ssp_path = files::path(dir, files::CONC_SSP);
    let ssp_cols = columns(&ssp_path, 1, "SSP CO2 concentrations")?;
    let ext_path = files::path(dir, files::CONC_SSP_2300);
    let ext_cols = columns(&ext_path, 1, "SSP CO2 concentration extensions")?;

    if hist_cols.len() < 2 {
        return Err(FigureError::dataset(
            "historical CO2 concentrations",
            hist_path,
            CoreError::ShapeMismatch {
                expected: "2 columns".into(),
                found: format!("{} columns", hist_cols.len()),
            },
        ));
    }
    if ssp_cols.len() != 7 {
        return Err(FigureError::dataset(
            "SSP CO2 concentrations",
            ssp_path,
            CoreError::ShapeMismatch {
                expected: "year plus 6 scenario columns".into(),
                found: format!("{} columns", ssp_cols.len()),
            },
        ));
    }
    if ext_cols.len() != 4 {
        return Err(FigureError::dataset(
            "SSP CO2 concentration extensions",
            ext_path,
            CoreError::ShapeMismatch {
                expected: "year plus 3 scenario columns".into(),
                found: format!("{} columns", ext_cols.len()),
            },
        ));
    }

    let ssp_years = &ssp_cols[0];
    // Column order in the SSP concentration table
    let ssp_order = [
        Scenario::Ssp119,
        Scenario::Ssp126,
        Scenario::Ssp245,
        Scenario::Ssp534Over,
        Scenario::Ssp370,
        Scenario::Ssp585,
    ];

    // The historical record ends the year before the scenarios begin;
    // append the (scenario-invariant) first SSP value so the lines join.
    let mut hist = Timeseries::from_values(hist_cols[1].clone(), hist_cols[0].clone());
    let bridge_value = ssp_cols[3][0];
    hist.push(ssp_years[0], bridge_value);

    let mut driven = IndexMap::new();
    for scenario in LINE_ORDER {
        let series = match scenario {
            Scenario::Historical => hist.clone(),
            other => {
                let column = 1 + ssp_order
                    .iter()
                    .position(|s| *s == other)
                    .expect("every future scenario has a concentration column");
                Timeseries::from_values(ssp_cols[column].clone(), ssp_years.clone())
            }
        };
        driven.insert(scenario, series);
    }

    let mut extended = IndexMap::new();
    for (i, scenario) in Scenario::EXTENDED.iter().enumerate() {
        extended.insert(
            *scenario,
            Timeseries::from_values(ext_cols[i + 1].clone(), ext_cols[0].clone()),
        );
    }

    let edriven_path = files::path(dir, files::CONC_EMISSIONS_DRIVEN);
    let edriven_cols = columns(&edriven_path, 1, "emissions-driven CO2 spread")?;
    if edriven_cols.len() != 4 {
        return Err(FigureError::dataset(
            "emissions-driven CO2 spread",
            edriven_path,
            CoreError::ShapeMismatch {
                expected: "year, mean, p5, p95".into(),
                found: format!("{} columns", edriven_cols.len()),
            },
        ));
    }
    let emissions_driven = EnsembleSummary {
        time: edriven_cols[0].clone(),
        mean: edriven_cols[1].clone(),
        lower: edriven_cols[2].clone(),
        upper: edriven_cols[3].clone(),
    };

    let mut magicc = IndexMap::new();
    for scenario in MAGICC_SCENARIOS {
        let path = files::magicc_concentrations(dir, scenario);
        let (years, members) = read_ensemble_table(&path)
            .map_err(dataset_err("MAGICC concentration ensemble", &path))?;
        let ensemble =
            Ensemble::new(members, years).map_err(dataset_err("MAGICC concentration ensemble", &path))?;
        info!(
            "MAGICC {}: {} members, {} years",
            scenario,
            ensemble.n_members(),
            ensemble.len()
        );
        magicc.insert(
            scenario,
            ensemble.summary(config.bands.lower, config.bands.upper),
        );
    }

    Ok(ConcentrationData {
        driven,
        extended,
        emissions_driven,
        magicc,
    })
}

/// Read a member table (year column + one column per model).
fn member_table(path: PathBuf, context: &str) -> FigureResult<(Array1<f64>, Vec<Array1<f64>>)> {
    let cols = columns(&path, 1, context)?;
    if cols.len() < 2 {
        return Err(FigureError::dataset(
            context,
            path,
            CoreError::ShapeMismatch {
                expected: "year plus at least one model column".into(),
                found: format!("{} columns", cols.len()),
            },
        ));
    }
    let mut iter = cols.into_iter();
    let years = iter.next().expect("checked above");
    Ok((years, iter.collect()))
}

/// Prepend a zero to every member: the emissions tables begin one year
/// after the flux axis does.
pub fn prepend_zero(members: &[Array1<f64>]) -> Vec<Array1<f64>> {
    members
        .iter()
        .map(|member| {
            let mut values = Vec::with_capacity(member.len() + 1);
            values.push(0.0);
            values.extend(member.iter().copied());
            Array1::from_vec(values)
        })
        .collect()
}

/// Sink fraction: cumulative net uptake over cumulative total emissions,
/// with land use folded into both numerator and denominator so the ratio
/// compares net ecosystem exchange against all anthropogenic carbon.
pub fn sink_fraction(
    flux: &Ensemble,
    fossil_emissions: &Ensemble,
    landuse: &Array1<f64>,
) -> CoreResult<Ensemble> {
    let nep = flux.add_profile(landuse)?;
    let total_emissions = fossil_emissions.add_profile(landuse)?;
    nep.cumulative().divide(&total_emissions.cumulative())
}

/// Historical + interpolated scenario land use on the flux time axis.
fn landuse_series(
    historical: &Timeseries,
    scenario: Scenario,
    years: &Array1<f64>,
) -> FigureResult<Array1<f64>> {
    let last_hist = historical
        .last_year()
        .ok_or_else(|| FigureError::Config("historical land-use record is empty".into()))?;
    let future: Vec<f64> = years.iter().copied().filter(|&y| y > last_hist).collect();

    let decadal = Timeseries::from_values(
        Array1::from_vec(landuse_decadal(scenario).to_vec()),
        Array1::from_vec(LANDUSE_YEARS.to_vec()),
    );
    let annual = decadal.interp_onto(&future)?;
    let spliced = historical.concat(&annual)?;

    if spliced.time() != years {
        return Err(FigureError::Config(format!(
            "land-use axis ({} years ending {:?}) does not line up with the flux axis ({} years)",
            spliced.len(),
            spliced.last_year(),
            years.len()
        )));
    }
    Ok(spliced.values().clone())
}

fn load_fluxes(dir: &Path, config: &FigureConfig) -> FigureResult<(FluxData, SinkFractionData)> {
    let lu_path = files::path(dir, files::LANDUSE_HISTORICAL);
    let lu_cols = columns(&lu_path, 0, "historical land-use emissions")?;
    if lu_cols.len() < 2 {
        return Err(FigureError::dataset(
            "historical land-use emissions",
            lu_path,
            CoreError::ShapeMismatch {
                expected: "year and flux columns".into(),
                found: format!("{} columns", lu_cols.len()),
            },
        ));
    }
    let landuse_hist = Timeseries::from_values(lu_cols[1].mapv(kg_to_gtc), lu_cols[0].clone());

    let mut annual = IndexMap::new();
    let mut member_counts = IndexMap::new();
    let mut fraction = IndexMap::new();

    for scenario in Scenario::FUTURE {
        let (years, ocean) =
            member_table(files::ocean_flux(dir, scenario), "ocean carbon flux members")?;
        let (land_years, land) =
            member_table(files::land_flux(dir, scenario), "land carbon flux members")?;
        let (_, emissions) = member_table(
            files::fossil_emissions(dir, scenario),
            "fossil-fuel emissions members",
        )?;

        let ocean = Ensemble::from_members(ocean, years.clone())
            .map_err(dataset_err("ocean carbon flux members", &files::ocean_flux(dir, scenario)))?;
        let land = Ensemble::from_members(land, land_years)
            .map_err(dataset_err("land carbon flux members", &files::land_flux(dir, scenario)))?;
        let flux = land
            .add(&ocean)
            .map_err(dataset_err("net carbon flux", &files::land_flux(dir, scenario)))?;

        // Emissions tables start in the year after the flux axis begins
        let emissions = Ensemble::from_members(prepend_zero(&emissions), years.clone()).map_err(
            dataset_err(
                "fossil-fuel emissions members",
                &files::fossil_emissions(dir, scenario),
            ),
        )?;

        let landuse = landuse_series(&landuse_hist, scenario, &years)?;
        let sink = sink_fraction(&flux, &emissions, &landuse)
            .map_err(dataset_err("sink fraction", &files::land_flux(dir, scenario)))?;

        info!(
            "{}: {} models over {} years",
            scenario,
            flux.n_members(),
            flux.len()
        );

        member_counts.insert(scenario, flux.n_members());
        annual.insert(
            scenario,
            flux.summary(config.bands.lower, config.bands.upper),
        );
        fraction.insert(
            scenario,
            sink.summary(config.bands.lower, config.bands.upper),
        );
    }

    let extended = load_extended_fluxes(dir, config)?;

    Ok((
        FluxData {
            annual,
            member_counts,
            extended,
        },
        SinkFractionData { fraction },
    ))
}

fn load_extended_fluxes(
    dir: &Path,
    config: &FigureConfig,
) -> FigureResult<IndexMap<Scenario, EnsembleSummary>> {
    // Per-model tables: year, then one column per extended scenario
    let mut per_model = Vec::new();
    for model in files::ESM_MODELS {
        let (years, land) = member_table_no_header(
            files::esm_land_flux(dir, model),
            "ESM land flux to 2300",
        )?;
        let (_, ocean) = member_table_no_header(
            files::esm_ocean_flux(dir, model),
            "ESM ocean flux to 2300",
        )?;
        if land.len() != Scenario::EXTENDED.len() || ocean.len() != Scenario::EXTENDED.len() {
            return Err(FigureError::dataset(
                "ESM flux to 2300",
                files::esm_land_flux(dir, model),
                CoreError::ShapeMismatch {
                    expected: format!("{} scenario columns", Scenario::EXTENDED.len()),
                    found: format!("{} and {}", land.len(), ocean.len()),
                },
            ));
        }
        per_model.push((years, land, ocean));
    }

    let mut extended = IndexMap::new();
    for (i, scenario) in Scenario::EXTENDED.iter().enumerate() {
        let years = per_model[0].0.clone();
        let members: Vec<Array1<f64>> = per_model
            .iter()
            .map(|(_, land, ocean)| &land[i] + &ocean[i])
            .collect();
        let ensemble = Ensemble::from_members(members, years).map_err(dataset_err(
            "ESM flux to 2300",
            &files::esm_land_flux(dir, files::ESM_MODELS[0]),
        ))?;
        let mut summary = ensemble.summary(config.bands.lower, config.bands.upper);

        // Only the SSP1-2.6 band is displayed, smoothed to suppress
        // interannual noise in the four-model envelope
        if *scenario == Scenario::Ssp126 {
            let window = config.smoothing.window;
            summary.lower = smooth_array(&summary.lower, &summary.time, window);
            summary.upper = smooth_array(&summary.upper, &summary.time, window);
        }
        extended.insert(*scenario, summary);
    }
    Ok(extended)
}

fn smooth_array(values: &Array1<f64>, time: &Array1<f64>, window: usize) -> Array1<f64> {
    Timeseries::from_values(values.clone(), time.clone())
        .smooth(window)
        .values()
        .clone()
}

fn member_table_no_header(
    path: PathBuf,
    context: &str,
) -> FigureResult<(Array1<f64>, Vec<Array1<f64>>)> {
    let cols = columns(&path, 0, context)?;
    if cols.len() < 2 {
        return Err(FigureError::dataset(
            context,
            path,
            CoreError::ShapeMismatch {
                expected: "year plus data columns".into(),
                found: format!("{} columns", cols.len()),
            },
        ));
    }
    let mut iter = cols.into_iter();
    let years = iter.next().expect("checked above");
    Ok((years, iter.collect()))
}

fn zonal_band(dir: &Path, parameter: &str, surface: &str) -> FigureResult<ZonalBand> {
    let mean_path = files::feedback_field(dir, &format!("{}_{}_zonalmean_ensmean", parameter, surface));
    let std_path = files::feedback_field(dir, &format!("{}_{}_zonalmean_ensstd", parameter, surface));

    let mean = zonal_profile(&mean_path, "zonal-mean feedback profile")?;
    let std = zonal_profile(&std_path, "zonal-std feedback profile")?;
    Ok(ZonalBand { mean, std })
}

fn zonal_profile(path: &Path, context: &str) -> FigureResult<ZonalProfile> {
    let cols = columns(path, 0, context)?;
    if cols.len() < 2 {
        return Err(FigureError::dataset(
            context,
            path,
            CoreError::ShapeMismatch {
                expected: "latitude and value columns".into(),
                found: format!("{} columns", cols.len()),
            },
        ));
    }
    ZonalProfile::new(cols[1].clone(), cols[0].clone()).map_err(dataset_err(context, path))
}

fn load_feedback(dir: &Path) -> FigureResult<FeedbackMaps> {
    let gridded = |field: &str| -> FigureResult<GriddedField> {
        let path = files::feedback_field(dir, field);
        let grid = read_gridded(&path).map_err(dataset_err("feedback parameter map", &path))?;
        if let Some((lo, hi)) = grid.value_range() {
            info!("{}: {}x{} cells in [{:.3}, {:.3}]", field, grid.nlat(), grid.nlon(), lo, hi);
        }
        Ok(grid)
    };

    Ok(FeedbackMaps {
        beta: gridded("beta_ensmean")?,
        gamma: gridded("gamma_ensmean")?,
        beta_agreement: gridded("beta_fraction_sign_agreement")?,
        gamma_agreement: gridded("gamma_fraction_sign_agreement")?,
        beta_land: zonal_band(dir, "beta", "land")?,
        beta_ocean: zonal_band(dir, "beta", "ocean")?,
        gamma_land: zonal_band(dir, "gamma", "land")?,
        gamma_ocean: zonal_band(dir, "gamma", "ocean")?,
    })
}

fn load_coastlines(dir: &Path) -> FigureResult<Option<Vec<Vec<(f64, f64)>>>> {
    let path = files::path(dir, files::COASTLINES);
    let cols = match read_columns(&path, 0) {
        Ok(cols) => cols,
        Err(CoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("no coastline overlay at {}; maps will have no outlines", path.display());
            return Ok(None);
        }
        Err(e) => return Err(FigureError::dataset("coastline overlay", path, e)),
    };
    if cols.len() < 2 {
        return Err(FigureError::dataset(
            "coastline overlay",
            path,
            CoreError::ShapeMismatch {
                expected: "lon and lat columns".into(),
                found: format!("{} columns", cols.len()),
            },
        ));
    }

    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (&lon, &lat) in cols[0].iter().zip(cols[1].iter()) {
        if lon.is_nan() || lat.is_nan() {
            if current.len() > 1 {
                segments.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push((lon, lat));
        }
    }
    if current.len() > 1 {
        segments.push(current);
    }
    info!("coastline overlay: {} segments", segments.len());
    Ok(Some(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn prepend_zero_shifts_members() {
        let members = vec![array![1.0, 2.0], array![3.0, 4.0]];
        let padded = prepend_zero(&members);
        assert_eq!(padded[0].to_vec(), vec![0.0, 1.0, 2.0]);
        assert_eq!(padded[1].to_vec(), vec![0.0, 3.0, 4.0]);
    }

    #[test]
    fn sink_fraction_is_uptake_over_emissions() {
        let years = array![2000.0, 2001.0];
        // One model taking up 2 GtC/yr against 4 GtC/yr of emissions
        let flux = Ensemble::new(array![[2.0, 2.0]], years.clone()).unwrap();
        let emissions = Ensemble::new(array![[4.0, 4.0]], years.clone()).unwrap();
        let landuse = array![0.0, 0.0];

        let sink = sink_fraction(&flux, &emissions, &landuse).unwrap();
        assert_relative_eq!(sink.values()[[0, 0]], 0.5);
        assert_relative_eq!(sink.values()[[0, 1]], 0.5);
    }

    #[test]
    fn sink_fraction_counts_landuse_on_both_sides() {
        let years = array![2000.0];
        let flux = Ensemble::new(array![[2.0]], years.clone()).unwrap();
        let emissions = Ensemble::new(array![[4.0]], years.clone()).unwrap();
        let landuse = array![2.0];

        // (2 + 2) / (4 + 2)
        let sink = sink_fraction(&flux, &emissions, &landuse).unwrap();
        assert_relative_eq!(sink.values()[[0, 0]], 4.0 / 6.0);
    }

    #[test]
    fn sink_fraction_accumulates_before_dividing() {
        let years = array![2000.0, 2001.0];
        let flux = Ensemble::new(array![[1.0, 3.0]], years.clone()).unwrap();
        let emissions = Ensemble::new(array![[2.0, 2.0]], years.clone()).unwrap();
        let landuse = array![0.0, 0.0];

        let sink = sink_fraction(&flux, &emissions, &landuse).unwrap();
        // Year 2: (1 + 3) / (2 + 2), not the mean of annual ratios
        assert_relative_eq!(sink.values()[[0, 1]], 1.0);
    }

    #[test]
    fn landuse_series_splices_and_interpolates() {
        let historical = Timeseries::from_values(
            array![0.5, 0.6],
            array![2013.0, 2014.0],
        );
        let years = array![2013.0, 2014.0, 2015.0, 2016.0];
        let series = landuse_series(&historical, Scenario::Ssp119, &years).unwrap();
        assert_eq!(series.len(), 4);
        assert_relative_eq!(series[0], 0.5);
        assert_relative_eq!(series[2], landuse_decadal(Scenario::Ssp119)[0]);
        // 2016 interpolates a fifth of the way from 2015 to 2020
        let d = landuse_decadal(Scenario::Ssp119);
        assert_relative_eq!(series[3], d[0] + (d[1] - d[0]) / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn landuse_series_rejects_misaligned_axes() {
        let historical = Timeseries::from_values(array![0.5], array![2014.0]);
        let years = array![2013.0, 2014.0, 2015.0];
        assert!(landuse_series(&historical, Scenario::Ssp126, &years).is_err());
    }

    #[test]
    fn decadal_tables_share_their_first_value() {
        // Every pathway leaves the same 2015 baseline
        let baseline = landuse_decadal(Scenario::Ssp119)[0];
        for scenario in Scenario::FUTURE {
            assert_relative_eq!(landuse_decadal(scenario)[0], baseline);
        }
    }
}
