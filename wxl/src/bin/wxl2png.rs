use {
    anyhow::{Context as _, Result as Anyhow},
    std::process::ExitCode,
};

const USAGE: &str = "Usage: wxl2png <file.wxl>";

fn main() -> ExitCode {
    log_init(log::LevelFilter::Info);

    let Some(path) = std::env::args().nth(1) else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<wxl::Error>()
                .map_or(1, wxl::Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(path: &str) -> Anyhow<()> {
    let config = wxl::Config::for_input(path)?;
    let header = wxl::convert(&config)
        .with_context(|| format!("converting {}", config.input))?;

    println!("Input File = {}", config.input);
    println!("Width = {}", header.wide);
    println!("Height = {}", header.high);
    println!("File saved: {}", config.output);
    Ok(())
}

fn log_init(level: log::LevelFilter) {
    use simplelog::*;
    let init = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if let Err(err) = init {
        eprintln!("logging disabled: {err}");
    }
}
