use baconpath::app::{BaconPathApp, LoadedData};
use baconpath::args::{Args, Command};
use baconpath::colors::ColorScheme;
use baconpath::display::{
    display_average, display_ranking, display_recommendations, display_search_info,
    display_search_results,
};
use baconpath::json_output::{
    create_average_output, create_path_output, create_ranking_output, create_recommend_output,
    print_json_output,
};
use baconpath::search::{
    create_path_request, create_recommend_request, execute_average, execute_path_search,
    execute_recommendations,
};
use baconpath_core::{VertexKind, average_bacon_ranking};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {:#}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> anyhow::Result<()> {
    let app = BaconPathApp::new(args.data.clone())?;
    let data = app.load_data()?;

    match &args.command {
        Command::Path {
            actor1,
            actor2,
            filter,
            quiet,
        } => {
            let request = create_path_request(actor1, actor2, filter, &data.actors)?;
            if args.verbose && !args.json {
                display_search_info(&request, colors);
            }

            let search = execute_path_search(&data.graph, request)?;
            if args.json {
                print_json_output(&create_path_output(&search));
            } else {
                display_search_results(&search, *quiet, args.verbose, colors);
            }
        }
        Command::Average { actor } => {
            let summary = execute_average(&data.graph, actor, &data.actors)?;
            if args.json {
                print_json_output(&create_average_output(&summary));
            } else {
                display_average(&summary, colors);
            }
        }
        Command::Ranking { limit } => run_ranking(&data, *limit, args.json, colors),
        Command::Recommend {
            movie,
            limit,
            filter,
        } => {
            let request = create_recommend_request(movie, *limit, filter, &data.movies)?;
            let recommended = execute_recommendations(&data.graph, &request)?;
            if args.json {
                print_json_output(&create_recommend_output(&data.graph, &request, &recommended));
            } else {
                display_recommendations(&data.graph, &request, &recommended, colors);
            }
        }
    }

    Ok(())
}

fn run_ranking(data: &LoadedData, limit: usize, json: bool, colors: &ColorScheme) {
    let mut ranking = average_bacon_ranking(&data.graph);
    ranking.truncate(limit);

    if json {
        print_json_output(&create_ranking_output(&ranking));
    } else {
        let total_actors = data.graph.all_keys(Some(VertexKind::Actor)).len();
        display_ranking(&ranking, total_actors, colors);
    }
}
