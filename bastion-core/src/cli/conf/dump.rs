use crate::conf::load_config;
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

pub fn dump(
    path: PathBuf,
    json: bool,
    yaml: bool,
    repr: RepresentationFormat,
) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    // default: json
    let yaml = yaml && !json;

    match repr {
        RepresentationFormat::Raw => emit(&cfg.sanitized(), yaml),
        RepresentationFormat::Runtime => emit(&cfg, yaml),
    }
}

fn emit<T: Serialize>(value: &T, yaml: bool) -> anyhow::Result<()> {
    if yaml {
        dump_yaml(value)
    } else {
        dump_json(value)
    }
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}

#[derive(Clone, Debug)]
pub enum RepresentationFormat {
    Raw,
    Runtime,
}

impl FromStr for RepresentationFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::Raw),
            "runtime" => Ok(Self::Runtime),
            _ => Err(anyhow::anyhow!("invalid output format: {}", s)),
        }
    }
}
