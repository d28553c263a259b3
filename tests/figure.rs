//! End-to-end test: synthesize a miniature dataset directory, load it,
//! render the figure and check the output image appears.

use carbonfig::config::FigureConfig;
use carbonfig::data::FigureData;
use carbonfig::figure;
use carbonfig_core::scenario::Scenario;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

struct TestDir(PathBuf);

impl TestDir {
    fn create(name: &str) -> TestDir {
        let path = std::env::temp_dir().join(format!(
            "carbonfig-it-{}-{}",
            std::process::id(),
            name
        ));
        fs::create_dir_all(&path).unwrap();
        TestDir(path)
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.0.join(name), contents).unwrap();
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

const FLUX_START: i32 = 2013;
const FLUX_END: i32 = 2100;
const N_MODELS: usize = 3;

/// Column table: year plus one column per model.
fn member_table(start: i32, end: i32, base: f64) -> String {
    let mut out = String::from("year m1 m2 m3\n");
    for year in start..=end {
        write!(out, "{}", year).unwrap();
        for m in 0..N_MODELS {
            let value = base + 0.01 * (year - start) as f64 + 0.1 * m as f64;
            write!(out, " {:.4}", value).unwrap();
        }
        out.push('\n');
    }
    out
}

fn two_column_table(header: Option<&str>, start: i32, end: i32, base: f64, slope: f64) -> String {
    let mut out = String::new();
    if let Some(h) = header {
        out.push_str(h);
        out.push('\n');
    }
    for year in start..=end {
        writeln!(out, "{} {:.4}", year, base + slope * (year - start) as f64).unwrap();
    }
    out
}

fn ensemble_table(start: i32, end: i32, base: f64) -> String {
    let mut out = String::new();
    for year in start..=end {
        write!(out, "{} ", year).unwrap();
    }
    out.push('\n');
    for m in 0..N_MODELS {
        for year in start..=end {
            write!(out, "{:.2} ", base + (year - start) as f64 + 5.0 * m as f64).unwrap();
        }
        out.push('\n');
    }
    out
}

fn gridded_table(fill: impl Fn(f64, f64) -> f64) -> String {
    let lats: Vec<f64> = (-4..=4).map(|k| 20.0 * k as f64).collect();
    let lons: Vec<f64> = (-2..=3).map(|k| 60.0 * k as f64).collect();
    let mut out = String::new();
    for lon in &lons {
        write!(out, "{} ", lon).unwrap();
    }
    out.push('\n');
    for lat in &lats {
        write!(out, "{}", lat).unwrap();
        for lon in &lons {
            write!(out, " {:.5}", fill(*lat, *lon)).unwrap();
        }
        out.push('\n');
    }
    out
}

fn zonal_table(scale: f64) -> String {
    let mut out = String::new();
    for k in -8..=8 {
        let lat = 10.0 * k as f64;
        writeln!(out, "{} {:.5}", lat, scale * (1.0 - (lat / 90.0).powi(2))).unwrap();
    }
    out
}

fn populate(dir: &TestDir) {
    // Concentration-driven records
    dir.write(
        "CMIP6_HIST_CO2.dat",
        &two_column_table(Some("year co2"), 1990, 2014, 354.0, 1.8),
    );
    let mut ssp = String::from("year ssp119 ssp126 ssp245 ssp534 ssp370 ssp585\n");
    for year in 2015..=2100 {
        let t = (year - 2015) as f64;
        writeln!(
            ssp,
            "{} {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
            year,
            400.0 + 0.2 * t,
            400.0 + 0.5 * t,
            400.0 + 1.5 * t,
            400.0 + 2.0 * t,
            400.0 + 4.0 * t,
            400.0 + 6.0 * t
        )
        .unwrap();
    }
    dir.write("CMIP6_SSP_CO2.dat", &ssp);

    let mut ext = String::from("year ssp126 ssp534 ssp585\n");
    for year in 2015..=2300 {
        let t = (year - 2015) as f64;
        writeln!(
            ext,
            "{} {:.2} {:.2} {:.2}",
            year,
            400.0 + 0.4 * t,
            400.0 + 0.8 * t,
            400.0 + 2.5 * t
        )
        .unwrap();
    }
    dir.write("CMIP6_SSP2300_CO2.dat", &ext);

    let mut edriven = String::from("year mean p5 p95\n");
    for year in 1990..=2100 {
        let t = (year - 1990) as f64;
        writeln!(
            edriven,
            "{} {:.2} {:.2} {:.2}",
            year,
            360.0 + 4.0 * t,
            350.0 + 3.8 * t,
            370.0 + 4.4 * t
        )
        .unwrap();
    }
    dir.write("CMIP6_e-CO2.dat", &edriven);

    // MAGICC ensembles
    for tag in ["ssp119", "ssp126", "ssp245", "ssp534-over", "ssp370"] {
        dir.write(
            &format!("MAGICCv7.5.1_atmospheric-co2_esm-{}.dat", tag),
            &ensemble_table(2015, 2100, 400.0),
        );
    }

    // Flux and emissions member tables
    for scenario in Scenario::FUTURE {
        let tag = scenario.file_tag();
        dir.write(
            &format!("global_total_FGCO2_GtC_yr_{}.txt", tag),
            &member_table(FLUX_START, FLUX_END, 1.5),
        );
        dir.write(
            &format!("global_total_NBP_GtC_yr_{}.txt", tag),
            &member_table(FLUX_START, FLUX_END, 1.0),
        );
        dir.write(
            &format!("ffEms{}_GtCyr.txt", tag),
            &member_table(FLUX_START + 1, FLUX_END, 8.0),
        );
    }

    // Historical land use in kg C / yr
    dir.write(
        "CMIP6_C4MIP_landuse_emissions.dat",
        &two_column_table(None, FLUX_START, 2014, 1.0e12, 1.0e10),
    );

    // Four ESMs extended to 2300
    for model in ["CanESM5", "IPSL-CM6A-LR", "UKESM1-0-LL", "CESM2-WACCM"] {
        dir.write(
            &format!("{}_nbp.dat", model),
            &two_column_table(None, 2100, 2300, 1.2, -0.002)
                .lines()
                .map(|l| format!("{} 0.8 0.4\n", l))
                .collect::<String>()
                .as_str(),
        );
        dir.write(
            &format!("{}_fgco2.dat", model),
            &two_column_table(None, 2100, 2300, 1.0, -0.001)
                .lines()
                .map(|l| format!("{} 0.6 0.3\n", l))
                .collect::<String>()
                .as_str(),
        );
    }

    // Feedback parameter fields
    dir.write(
        "carbon_feedback_beta_ensmean.dat",
        &gridded_table(|lat, lon| 0.02 * (lat / 90.0) * (lon / 180.0).cos()),
    );
    dir.write(
        "carbon_feedback_gamma_ensmean.dat",
        &gridded_table(|lat, lon| -1.0 * (lat / 90.0) + 0.1 * (lon / 180.0)),
    );
    dir.write(
        "carbon_feedback_beta_fraction_sign_agreement.dat",
        &gridded_table(|lat, _| if lat.abs() > 60.0 { 0.5 } else { 0.9 }),
    );
    dir.write(
        "carbon_feedback_gamma_fraction_sign_agreement.dat",
        &gridded_table(|_, _| 0.9),
    );
    for parameter in ["beta", "gamma"] {
        for surface in ["land", "ocean"] {
            dir.write(
                &format!("carbon_feedback_{}_{}_zonalmean_ensmean.dat", parameter, surface),
                &zonal_table(if parameter == "beta" { 0.1 } else { -5.0 }),
            );
            dir.write(
                &format!("carbon_feedback_{}_{}_zonalmean_ensstd.dat", parameter, surface),
                &zonal_table(if parameter == "beta" { 0.02 } else { 1.0 }),
            );
        }
    }

    // Short coastline segment plus a break
    dir.write(
        "coastlines.dat",
        "0 0\n10 5\n20 0\nNaN NaN\n-30 -20\n-20 -25\n",
    );
}

fn assert_written(path: &Path) {
    let metadata = fs::metadata(path).expect("figure file should exist");
    assert!(metadata.len() > 0, "figure file should not be empty");
}

#[test]
fn loads_and_renders_the_full_figure() {
    let dir = TestDir::create("full");
    populate(&dir);

    let config = FigureConfig::default();
    let data = FigureData::load(&dir.0, &config).expect("dataset should load");

    // Ingestion sanity: every scenario line, bridged history, real counts
    assert_eq!(data.concentration.driven.len(), Scenario::ALL.len());
    let hist = &data.concentration.driven[&Scenario::Historical];
    assert_eq!(hist.last_year(), Some(2015.0));
    for scenario in Scenario::FUTURE {
        assert_eq!(data.flux.member_counts[&scenario], N_MODELS);
    }

    // The sink fraction must end up finite and within (0, 1) for data
    // where uptake is a stable share of emissions
    let sink = &data.sink.fraction[&Scenario::Ssp245];
    let last = sink.mean[sink.mean.len() - 1];
    assert!(last.is_finite() && last > 0.0 && last < 1.0, "sink fraction {last}");

    // Extended fluxes stack the four ESMs; the concentration extensions
    // are ingested alongside them
    assert_eq!(data.flux.extended.len(), Scenario::EXTENDED.len());
    assert_eq!(data.concentration.extended.len(), Scenario::EXTENDED.len());
    assert_eq!(
        data.concentration.extended[&Scenario::Ssp585].last_year(),
        Some(2300.0)
    );

    let out = dir.0.join("TS5.png");
    figure::render(&data, &config, &out).expect("figure should render");
    assert_written(&out);
}

#[test]
fn renders_without_optional_coastlines_and_hidden_scenarios() {
    let dir = TestDir::create("nocoast");
    populate(&dir);
    fs::remove_file(dir.0.join("coastlines.dat")).unwrap();

    let config: FigureConfig =
        toml::from_str("[canvas]\nwidth = 800\nheight = 1200\n\n[scenarios]\nssp534 = false\n")
            .unwrap();
    config.validate().unwrap();

    let data = FigureData::load(&dir.0, &config).expect("dataset should load");
    assert!(data.coastlines.is_none());

    let out = dir.0.join("TS5-small.png");
    figure::render(&data, &config, &out).expect("figure should render");
    assert_written(&out);
}

#[test]
fn missing_dataset_is_a_hard_error() {
    let dir = TestDir::create("missing");
    populate(&dir);
    fs::remove_file(dir.0.join("CMIP6_SSP_CO2.dat")).unwrap();

    let config = FigureConfig::default();
    assert!(FigureData::load(&dir.0, &config).is_err());
}
