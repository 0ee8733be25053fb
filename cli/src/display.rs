use baconpath_core::{AttributeFilter, AttributeKey, Graph, Recommendation};

use crate::colors::ColorScheme;
use crate::search::{AverageSummary, PathRequest, PathSearchResult, RecommendRequest};
use crate::utils::{format_average, format_number};

fn describe_filter(filter: &AttributeFilter) -> String {
    let bound = |value: f64| {
        if value.is_finite() {
            format!("{}", value)
        } else {
            "any".to_string()
        }
    };
    format!(
        "{} in [{}, {}]",
        filter.key.as_str(),
        bound(filter.lower),
        bound(filter.upper)
    )
}

pub fn display_search_info(request: &PathRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding Bacon path from {} to {}",
        colors.actor_name(&format!("\"{}\"", request.from_actor)),
        colors.actor_name(&format!("\"{}\"", request.to_actor))
    );

    if let Some(filter) = &request.config.filter {
        println!(
            "⚡ Only crossing movies with {}",
            colors.number(&describe_filter(filter))
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    search: &PathSearchResult,
    quiet: bool,
    verbose: bool,
    colors: &ColorScheme,
) {
    if verbose {
        println!("\n---\n");
    }

    match search.bacon_number() {
        Some(bacon_number) => {
            display_successful_path(search, bacon_number, quiet, colors);
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.actor_name(&format!("\"{}\"", search.request.from_actor)),
                colors.actor_name(&format!("\"{}\"", search.request.to_actor))
            );
        }
    }

    if verbose {
        display_search_statistics(
            search.result.vertices_visited,
            search.result.elapsed_secs,
            colors,
        );
    }
}

fn display_successful_path(
    search: &PathSearchResult,
    bacon_number: usize,
    quiet: bool,
    colors: &ColorScheme,
) {
    println!(
        "{} Bacon number {}",
        colors.success("✅"),
        colors.number(&bacon_number.to_string())
    );

    // Show path flow first
    let path_flow = search
        .hops
        .iter()
        .map(|hop| colors.actor_name(&format!("\"{}\"", hop.from)).to_string())
        .chain(std::iter::once(
            colors
                .actor_name(&format!("\"{}\"", search.request.to_actor))
                .to_string(),
        ))
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    if quiet {
        return;
    }

    println!();
    for (step_index, hop) in search.hops.iter().enumerate() {
        let movies = hop
            .shared_movies
            .iter()
            .map(|movie| colors.movie_title(movie).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:2} {} → {} [{}]",
            colors.step_number(&format!("{}.", step_index + 1)),
            colors.actor_name(&format!("\"{}\"", hop.from)),
            colors.actor_name(&format!("\"{}\"", hop.to)),
            movies
        );
    }
}

fn display_search_statistics(vertices_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} actors and movies in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(vertices_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}

pub fn display_average(summary: &AverageSummary, colors: &ColorScheme) {
    let actor = colors.actor_name(&format!("\"{}\"", summary.actor));
    match summary.rank {
        Some(rank) if summary.average.is_finite() => {
            println!(
                "The average Bacon number for {} is {}",
                actor,
                colors.number(&format_average(summary.average))
            );
            println!(
                "🏆 Ranked {} out of {} in the overall rankings",
                colors.number(&format_number(rank)),
                colors.number(&format_number(summary.ranked_actors))
            );
        }
        _ => {
            println!(
                "{} {} shares no movie with any other actor",
                colors.error("❌"),
                actor
            );
        }
    }
}

pub fn display_ranking(ranking: &[(String, f64)], total_actors: usize, colors: &ColorScheme) {
    println!(
        "🏆 Lowest average Bacon numbers among {} actors:\n",
        colors.number(&format_number(total_actors))
    );
    for (index, (actor, average)) in ranking.iter().enumerate() {
        println!(
            "{:4} {} {}",
            colors.step_number(&format!("{}.", index + 1)),
            colors.actor_name(&format!("\"{}\"", actor)),
            colors.number(&format_average(*average))
        );
    }
}

pub fn display_recommendations(
    graph: &Graph,
    request: &RecommendRequest,
    recommended: &[Recommendation],
    colors: &ColorScheme,
) {
    if recommended.is_empty() {
        println!(
            "{} No movies share cast with {}",
            colors.error("❌"),
            colors.movie_title(&format!("\"{}\"", request.movie))
        );
        return;
    }

    println!(
        "🎞️  Movies similar to {}:\n",
        colors.movie_title(&format!("\"{}\"", request.movie))
    );

    let shown_key = request.config.filter.map(|filter| filter.key);
    for (index, recommendation) in recommended.iter().enumerate() {
        let mut formatted_line = format!(
            "{:3} {} [{}]",
            colors.step_number(&format!("{}.", index + 1)),
            colors.movie_title(&format!("\"{}\"", recommendation.movie)),
            colors.number(&format!("{:.3}", recommendation.similarity))
        );

        if let (Some(key), Ok(Some(attributes))) =
            (shown_key, graph.movie_attributes(&recommendation.movie))
        {
            let value = match key {
                AttributeKey::Year => attributes.year.to_string(),
                AttributeKey::Rating => format!("{:.1}", attributes.rating),
            };
            formatted_line.push_str(&format!(" - {} {}", key.as_str(), value));
        }

        println!("{}", formatted_line);
    }
}
