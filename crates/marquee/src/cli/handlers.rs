//! Command handlers.

use super::commands::{Commands, OutputFormat};
use super::render::{movie_details, movie_row, print_json, print_movies};
use marquee::{
    decades_descending, FavoritesStore, FileSystemStore, FixtureSource, LocalStore,
    MarqueeConfig, MarqueeResult, MovieCatalog, MovieFacade, MovieId, ThemeStore,
};
use std::sync::Arc;

/// Everything a command needs, wired in dependency order.
pub struct App {
    facade: MovieFacade,
    store: Arc<dyn LocalStore>,
}

/// Build storage, source, favorites and facade from configuration.
#[tracing::instrument(skip(config))]
pub async fn build_app(config: &MarqueeConfig) -> MarqueeResult<App> {
    let store: Arc<dyn LocalStore> = Arc::new(FileSystemStore::new(config.storage_path())?);

    let source = match config.fixtures() {
        Some(path) => FixtureSource::from_file(path)?,
        None => FixtureSource::bundled()?,
    };
    tracing::debug!(movies = source.movies().len(), "Movie source ready");

    let catalog = Arc::new(MovieCatalog::new(Arc::new(source)));
    let favorites = Arc::new(FavoritesStore::open(store.clone()).await);
    if let Some(error) = favorites.state().error() {
        eprintln!("warning: {}", error);
    }

    Ok(App {
        facade: MovieFacade::new(catalog, favorites),
        store,
    })
}

/// Run one command against the app.
pub async fn handle_command(app: &App, command: Commands) -> MarqueeResult<()> {
    match command {
        Commands::Home { format } => {
            let movies = app.facade.get_home_movies().await;
            report_catalog_error(app);
            print_movies(&movies, format)
        }

        Commands::Decades { format } => show_decades(app, format).await,

        Commands::Favorites { format } => {
            let movies = app.facade.get_favorite_movies().await;
            report_catalog_error(app);
            print_movies(&movies, format)
        }

        Commands::Show { id, size, format } => {
            match app.facade.get_movie_by_id(MovieId::from(id)).await {
                Some(movie) => match format {
                    OutputFormat::Json => print_json(&movie)?,
                    OutputFormat::Human => println!("{}", movie_details(&movie, &size)),
                },
                None => {
                    report_catalog_error(app);
                    println!("No movie with id {}", id);
                }
            }
            Ok(())
        }

        Commands::Toggle { id } => {
            let id = MovieId::from(id);
            let now_favorite = app.facade.toggle_movie_favorite(id).await;
            if let Some(error) = app.facade.favorites().state().error() {
                eprintln!("warning: {}", error);
            }
            if now_favorite {
                println!("Added {} to favorites", id);
            } else {
                println!("Removed {} from favorites", id);
            }
            Ok(())
        }

        Commands::Search {
            query,
            limit,
            format,
        } => {
            let movies = app.facade.search_movies(&query, limit).await;
            report_catalog_error(app);
            print_movies(&movies, format)
        }

        Commands::Theme { toggle } => {
            let theme = ThemeStore::open(app.store.clone()).await;
            let current = if toggle {
                theme.toggle().await
            } else {
                theme.current()
            };
            if let Some(error) = theme.state().error() {
                eprintln!("warning: {}", error);
            }
            println!("{}", current);
            Ok(())
        }
    }
}

async fn show_decades(app: &App, format: OutputFormat) -> MarqueeResult<()> {
    let groups = app.facade.get_movies_by_decades().await;
    report_catalog_error(app);

    match format {
        OutputFormat::Json => print_json(&groups),
        OutputFormat::Human => {
            for decade in decades_descending(&groups) {
                println!("{}", decade);
                println!("{:-<60}", "");
                for movie in groups.get(decade).into_iter().flatten() {
                    println!("{}", movie_row(movie));
                }
                println!();
            }
            Ok(())
        }
    }
}

fn report_catalog_error(app: &App) {
    if let Some(error) = app.facade.catalog().state().error() {
        eprintln!("warning: {}", error);
    }
}
