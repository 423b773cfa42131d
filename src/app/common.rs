use abaplus::aba::{ABAFramework, ABAPlusReader, RawFramework};
use anyhow::{Context, Result};
use clap::Arg;
use log::info;
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the ABA framework")
        .required(true)
}

pub(crate) const ARG_PREFERENCES: &str = "PREFERENCES";

pub(crate) fn preferences_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_PREFERENCES)
        .short("p")
        .long("preferences")
        .empty_values(false)
        .multiple(false)
        .help(r#"a preference expression (e.g. "1,2 > 3") overriding the ranks of the input file"#)
        .required(false)
}

pub(crate) fn read_raw_from_file(file_path: &str) -> Result<RawFramework<String>> {
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(File::open(canonicalized)?);
    ABAPlusReader::default().read(&mut file_reader)
}

pub(crate) fn build_framework(raw: &RawFramework<String>) -> Result<ABAFramework<String>> {
    let framework = ABAFramework::build_and_validate(raw)?;
    info!(
        "the framework has {} literal(s), {} assumption(s) and {} rule(s)",
        framework.language().len(),
        framework.n_assumptions(),
        framework.n_rules(),
    );
    Ok(framework)
}

pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
