use uv_create::{
    cli::{get_cli, get_log_level_from_verbose, print_help, run},
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let cli = get_cli();
    let log_level = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    let Some(command) = cli.command else {
        print_help();
        std::process::exit(exit_codes::SUCCESS);
    };

    let stdout = std::io::stdout();
    if let Err(err) = run(command, cli.template_dir, &mut stdout.lock()) {
        default_error_handler(err);
    }
}
