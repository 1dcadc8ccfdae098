use crate::FailResult;
use crate::{YamlRead, Job, EllipseJob, System, Direction};
use crate::logging::init_global_logger;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use orbis_array_types::{M33, V3};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

fn vector_args(names: &[&'static str; 3]) -> Vec<Arg<'static, 'static>> {
    names.iter().map(|&name| {
        Arg::with_name(name).required(true).takes_value(true)
    }).collect()
}

fn app() -> App<'static, 'static> {
    App::new("orbis")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Semi-axes of ellipses and Jacobians of coordinate conversions.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .args(&[
            Arg::with_name("verbose").short("v").long("verbose").global(true)
                .help("show trace-level log output from orbis crates"),
            Arg::with_name("log_file").long("log-file").value_name("FILE").global(true)
                .takes_value(true).number_of_values(1)
                .help("also write log output to this file"),
        ])
        .subcommand({
            SubCommand::with_name("ellipse-axes")
                .about("Find the semi-axes of the ellipse generated by two vectors.")
                .setting(AppSettings::AllowNegativeNumbers)
                .args(&vector_args(&["X1", "Y1", "Z1"]))
                .args(&vector_args(&["X2", "Y2", "Z2"]))
        })
        .subcommand({
            SubCommand::with_name("jacobian")
                .about("Evaluate the Jacobian of a coordinate conversion at a point.")
                .setting(AppSettings::AllowNegativeNumbers)
                .args(&[
                    Arg::with_name("system").long("system").short("s").required(true)
                        .takes_value(true).possible_values(System::NAMES),
                    Arg::with_name("direction").long("direction").short("d").required(true)
                        .takes_value(true).possible_values(Direction::NAMES)
                        .help("to-rect: derivatives of (x, y, z). \
                               from-rect: derivatives of the curvilinear coordinates."),
                ])
                .args(&vector_args(&["A", "B", "C"]))
        })
        .subcommand({
            SubCommand::with_name("batch")
                .about("Run every computation in a YAML job file, and write the results as JSON.")
                .args(&[
                    Arg::with_name("config").short("c").long("config").value_name("JOB")
                        .required(true).takes_value(true).number_of_values(1)
                        .help("job file (yaml)"),
                    Arg::with_name("output").short("o").long("output").value_name("OUT")
                        .takes_value(true).number_of_values(1)
                        .help("output file (json). Defaults to stdout."),
                ])
        })
}

fn parse_v3(m: &ArgMatches, names: [&str; 3]) -> FailResult<V3> {
    let mut out = V3::zero();
    for (k, &name) in names.iter().enumerate() {
        let s = m.value_of(name).ok_or_else(|| format_err!("missing argument {}", name))?;
        out[k] = s.parse().map_err(|e| format_err!("invalid value for {}: {:?} ({})", name, s, e))?;
    }
    Ok(out)
}

fn format_v3(v: &V3) -> String
{ format!("{:>22.15e} {:>22.15e} {:>22.15e}", v[0], v[1], v[2]) }

fn print_matrix(m: &M33) {
    for row in m.iter() {
        println!("{}", format_v3(row));
    }
}

pub fn orbis() {
    wrap_result_main(|| {
        let matches = app().get_matches();
        init_global_logger(
            matches.is_present("verbose"),
            matches.value_of_os("log_file").map(Path::new),
        )?;

        match matches.subcommand() {
            ("ellipse-axes", Some(m)) => {
                let job = EllipseJob {
                    vec1: parse_v3(m, ["X1", "Y1", "Z1"])?,
                    vec2: parse_v3(m, ["X2", "Y2", "Z2"])?,
                    center: None,
                };
                let axes = crate::ellipse_axes(&job);
                println!("semi-major: {}", format_v3(&axes.semi_major));
                println!("semi-minor: {}", format_v3(&axes.semi_minor));
                if axes.degenerate {
                    warn!("The ellipse is degenerate.");
                }
            },
            ("jacobian", Some(m)) => {
                let system: System = m.value_of("system").unwrap_or_default().parse()?;
                let direction: Direction = m.value_of("direction").unwrap_or_default().parse()?;
                let point = parse_v3(m, ["A", "B", "C"])?;
                print_matrix(&crate::jacobian(system, direction, &point)?);
            },
            ("batch", Some(m)) => {
                let config = m.value_of_os("config").map(Path::new)
                    .ok_or_else(|| format_err!("missing --config"))?;
                run_batch_file(config, m.value_of_os("output").map(Path::new))?;
            },
            (name, _) => bail!("unrecognized subcommand: {:?}", name),
        }
        Ok(())
    });
}

fn run_batch_file(config: &Path, output: Option<&Path>) -> FailResult<()>
{
    info!("Reading job from {}", config.display());
    let job = {
        let file = File::open(config).map_err(|e| format_err!("{}: {}", config.display(), e))?;
        Job::from_reader(BufReader::new(file))?
    };

    let results = crate::run_batch(&job)?;

    match output {
        Some(path) => {
            info!("Writing results to {}", path.display());
            let mut w = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut w, &results)?;
            writeln!(w)?;
            w.flush()?;
        },
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &results)?;
            writeln!(w)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        let m = app().get_matches_from_safe(vec![
            "orbis", "ellipse-axes", "1", "1", "1", "1", "-1", "1",
        ]).unwrap();
        let (name, sub) = m.subcommand();
        assert_eq!(name, "ellipse-axes");
        let sub = sub.unwrap();
        assert_eq!(parse_v3(sub, ["X2", "Y2", "Z2"]).unwrap(), V3([1.0, -1.0, 1.0]));

        let m = app().get_matches_from_safe(vec![
            "orbis", "-v", "jacobian", "--system", "cylindrical", "-d", "from-rect", "0", "-2.5", "1",
        ]).unwrap();
        assert!(m.is_present("verbose"));
        let sub = m.subcommand_matches("jacobian").unwrap();
        assert_eq!(sub.value_of("system"), Some("cylindrical"));
        assert_eq!(parse_v3(sub, ["A", "B", "C"]).unwrap(), V3([0.0, -2.5, 1.0]));
    }

    #[test]
    fn cli_rejects() {
        assert!(app().get_matches_from_safe(vec!["orbis", "ellipse-axes", "1", "2"]).is_err());
        assert!(app().get_matches_from_safe(vec![
            "orbis", "jacobian", "--system", "polar", "-d", "to-rect", "1", "2", "3",
        ]).is_err());

        let m = app().get_matches_from_safe(vec![
            "orbis", "ellipse-axes", "1", "x", "1", "1", "1", "1",
        ]).unwrap();
        let err = parse_v3(m.subcommand_matches("ellipse-axes").unwrap(), ["X1", "Y1", "Z1"]).unwrap_err();
        assert!(err.to_string().contains("Y1"));
    }
}
