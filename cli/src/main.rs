mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, membership};
use gymkit_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        today: commands.today,
    };

    print::banner(&cfg);

    let result = match commands.command {
        Commands::Demo => {
            print::section("building the sample gym", &cfg);
            demo::demo(&cfg)
        }
        Commands::Membership(args) => {
            print::section("membership", &cfg);
            membership::membership(args, &cfg)
        }
    };

    print::closing_rule();
    result
}
