use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use gram_core::Prg;
use gram_core::utils::{get_dynamic_reader_w_stdin, get_dynamic_writer_w_stdout};
use gram_kmers::{KmerConfig, anchors, par_generate, unique_kmers};

pub fn run_kmers(matches: &ArgMatches) -> Result<()> {
    let prg_path = matches
        .get_one::<String>("prg")
        .expect("A path to a PRG file is required.");

    let config = resolve_config(matches)?;
    let threads = matches.get_one::<usize>("threads").copied().unwrap_or(1);
    let unique = matches.get_flag("unique");
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    let progress = match matches.get_flag("quiet") {
        true => ProgressBar::hidden(),
        false => kmer_spinner()?,
    };

    let prg = load_prg(prg_path)
        .with_context(|| format!("Failed to load PRG from {}", prg_path))?;
    let regions = prg.regions();

    log::info!(
        "Generating {}-mers within {} bases of {} anchors",
        config.kmer_size,
        config.max_base_distance(),
        anchors(regions, config.include_invariant_anchors()).count()
    );

    let mut writer = get_dynamic_writer_w_stdout(output.as_deref())
        .with_context(|| format!("Failed to open output {:?}", output))?;

    let written = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;
        let windows = pool.install(|| {
            par_generate(
                config.max_base_distance(),
                config.kmer_size,
                regions,
                config.include_invariant_anchors(),
            )
        })?;
        let kmers = windows.into_iter().flatten();
        match unique {
            true => write_kmers(&mut writer, unique_kmers(kmers), &progress)?,
            false => write_kmers(&mut writer, kmers, &progress)?,
        }
    } else {
        let kmers = config.generate(regions)?;
        match unique {
            true => write_kmers(&mut writer, unique_kmers(kmers), &progress)?,
            false => write_kmers(&mut writer, kmers, &progress)?,
        }
    };

    writer.flush()?;
    progress.finish_and_clear();
    log::info!("Wrote {} k-mers", written);

    Ok(())
}

///
/// Load the PRG from a file, or from stdin when the path is `-`.
///
fn load_prg(prg_path: &str) -> Result<Prg> {
    if prg_path != "-" {
        return Ok(Prg::from_file(prg_path)?);
    }

    let prg = Prg::from_reader(get_dynamic_reader_w_stdin(prg_path)?)?;
    log::info!(
        "Loaded PRG from stdin: {} regions, {} variant sites",
        prg.len(),
        prg.variant_site_count()
    );
    Ok(prg)
}

///
/// Merge the config file (if any) with command line overrides.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<KmerConfig> {
    let from_file = match matches.get_one::<String>("config") {
        Some(path) => Some(
            KmerConfig::try_from(Path::new(path))
                .with_context(|| format!("Failed to load k-mer config from {}", path))?,
        ),
        None => None,
    };

    let kmer_size = matches
        .get_one::<usize>("kmer-size")
        .copied()
        .or(from_file.as_ref().map(|config| config.kmer_size))
        .ok_or_else(|| {
            anyhow!("A k-mer size is required: pass --kmer-size or set kmer_size in --config")
        })?;
    let base = from_file.unwrap_or_else(|| KmerConfig::new(kmer_size));

    let config = KmerConfig {
        kmer_size,
        max_base_distance: matches
            .get_one::<usize>("max-base-distance")
            .copied()
            .or(base.max_base_distance),
        include_invariant_anchors: match matches.get_flag("all-kmers") {
            true => Some(true),
            false => base.include_invariant_anchors,
        },
    };
    config.validate()?;

    Ok(config)
}

fn kmer_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {pos} k-mers written ({per_sec})")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    Ok(spinner)
}

fn write_kmers<W, I>(writer: &mut W, kmers: I, progress: &ProgressBar) -> Result<u64>
where
    W: Write,
    I: Iterator<Item = String>,
{
    let mut written = 0;
    for kmer in kmers {
        writeln!(writer, "{}", kmer)?;
        written += 1;
        progress.inc(1);
    }
    Ok(written)
}
