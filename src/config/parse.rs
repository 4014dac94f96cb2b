use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use figment::error::Kind;
use figment::providers::{Format, Json, Toml, Yaml};
use figment::Figment;

use crate::config::SensorConfig;
use crate::error::Result;

/// Merge a configuration file into `figment`, inferring its format from the file extension.
/// Files without an extension are read as TOML.
fn admerge_file(figment: Figment, path: &Path) -> Result<Figment> {
    Ok(match path.extension().and_then(OsStr::to_str) {
        Some("toml") | None => figment.admerge(Toml::file(path)),
        Some("json") => figment.admerge(Json::file(path)),
        Some("yaml") | Some("yml") => figment.admerge(Yaml::file(path)),
        Some(e) => bail!("Unsupported file extension: {}", e),
    })
}

pub fn parse(path: Option<&Path>) -> Result<SensorConfig> {
    let (figment, cfg_file) = match path {
        Some(path) => {
            let cfg_file = path.canonicalize()?;
            log::debug!("reading configuration file: {}", cfg_file.display());
            (admerge_file(Figment::new(), &cfg_file)?, cfg_file)
        }
        None => match dirs::config_dir().map(|d| d.join("tmpsnread/config")) {
            // default configuration files are all optional
            Some(cfg_file) => (
                Figment::new()
                    .merge(Toml::file(cfg_file.with_extension("toml")))
                    .merge(Json::file(cfg_file.with_extension("json")))
                    .merge(Yaml::file(cfg_file.with_extension("yaml")))
                    .merge(Yaml::file(cfg_file.with_extension("yml"))),
                cfg_file,
            ),
            None => return Ok(SensorConfig::default()),
        },
    };

    let cfg_dir = cfg_file
        .parent()
        .ok_or_else(|| "failed to find config dir")?;

    // parse any additional config files
    let figment = {
        let mut figment = figment;
        let mut seen_config_files = HashSet::new();
        seen_config_files.insert(cfg_file.clone());
        loop {
            let include_paths = match figment.extract_inner::<Vec<PathBuf>>("include") {
                // we got some include paths, make them relative to the main config file
                Ok(paths) => paths
                    .into_iter()
                    .map(|p| cfg_dir.join(p).canonicalize())
                    .collect::<Result<Vec<_>, _>>()?,
                // ignore if "include" wasn't specified at all
                Err(e) if matches!(e.kind, Kind::MissingField(_)) => vec![],
                // some other error occurred
                Err(e) => bail!(e),
            };

            let mut added = false;
            for include in include_paths {
                if seen_config_files.contains(&include) {
                    continue;
                }

                log::debug!("including configuration file: {}", include.display());
                figment = admerge_file(figment, &include)?;
                seen_config_files.insert(include);
                added = true;
            }

            if !added {
                break figment;
            }
        }
    };

    Ok(figment.extract::<SensorConfig>()?)
}
