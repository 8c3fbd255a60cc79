use super::*;
use crate::affinity::GenreAffinity;
use movie_rec_models::{History, Movie, Watchlist};

fn sample_catalog() -> Catalog {
    Catalog::from_movies(vec![
        Movie::new("M001", "Inception", "Sci-Fi", 2010, 8.8),
        Movie::new("M002", "The Dark Knight", "Action", 2008, 9.0),
        Movie::new("M003", "Interstellar", "Sci-Fi", 2014, 8.6),
        Movie::new("M004", "Parasite", "Thriller", 2019, 8.5),
        Movie::new("M005", "The Godfather", "Crime", 1972, 9.2),
        Movie::new("M006", "Mad Max: Fury Road", "Action", 2015, 8.1),
        Movie::new("M007", "Arrival", "Sci-Fi", 2016, 7.9),
        Movie::new("M008", "Knives Out", "Mystery", 2019, 7.9),
    ])
}

/// History: two Sci-Fi movies; watchlist: one Action movie
fn sci_fi_fan() -> UserProfile {
    UserProfile::with_lists("alice", "alice123", Watchlist::parse("M002"), History::parse("M001;M003"))
}

fn ids<'a>(movies: &[&'a Movie]) -> Vec<&'a str> {
    movies.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn test_default_strategy_is_hybrid() {
    let catalog = sample_catalog();
    let engine = RecommendationEngine::new(&catalog);
    assert_eq!(engine.current_strategy(), StrategyKind::Hybrid);
    assert_eq!(engine.current_strategy_name(), "Hybrid Recommendation");
}

#[test]
fn test_unknown_strategy_keeps_last_valid_selection() {
    let catalog = sample_catalog();
    let mut engine = RecommendationEngine::new(&catalog);

    assert!(engine.set_strategy("rating"));
    assert!(!engine.set_strategy("bogus"));
    assert_eq!(engine.current_strategy(), StrategyKind::Rating);
    assert_eq!(engine.current_strategy_name(), "Rating-Based Recommendation");
}

#[test]
fn test_metadata_accessors() {
    let catalog = sample_catalog();
    let engine = RecommendationEngine::new(&catalog);

    assert_eq!(engine.available_strategies(), vec!["genre", "rating", "year", "hybrid"]);
    assert_eq!(
        engine.strategy_description("year"),
        "Recommends the most recent movies you haven't watched yet"
    );
    assert_eq!(engine.strategy_description("bogus"), "Unknown strategy");
    assert_eq!(engine.strategy_display_name("genre"), "Genre-Based Recommendation");
    assert_eq!(engine.strategy_display_name("bogus"), "Unknown");
}

#[test]
fn test_fresh_user_falls_back_to_top_rated() {
    let catalog = Catalog::from_movies(vec![
        Movie::new("M001", "A", "Drama", 2001, 8.0),
        Movie::new("M002", "B", "Comedy", 2002, 9.0),
        Movie::new("M003", "C", "Horror", 2003, 7.0),
        Movie::new("M004", "D", "Drama", 2004, 8.5),
        Movie::new("M005", "E", "Action", 2005, 7.5),
    ]);
    let user = UserProfile::new("newbie", "pw");
    let engine = RecommendationEngine::new(&catalog).with_strategy(StrategyKind::Genre);

    let recommendations = engine.recommend(&user, 3);

    assert_eq!(ids(&recommendations), vec!["M002", "M004", "M001"]);
}

#[test]
fn test_unresolvable_lists_fall_back_to_top_rated() {
    let catalog = sample_catalog();
    let user = UserProfile::with_lists("ghost", "pw", Watchlist::parse("X100"), History::parse("X200"));
    let engine = RecommendationEngine::new(&catalog);

    let recommendations = engine.recommend(&user, 3);

    assert_eq!(ids(&recommendations), vec!["M005", "M002", "M001"]);
}

#[test]
fn test_genre_strategy_orders_by_affinity_then_rating() {
    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let engine = RecommendationEngine::new(&catalog).with_strategy(StrategyKind::Genre);

    let recommendations = engine.recommend(&user, 10);

    // Sci-Fi (2), Action (1), then zero-affinity movies by rating
    assert_eq!(ids(&recommendations), vec!["M007", "M006", "M005", "M004", "M008"]);
}

#[test]
fn test_hybrid_matches_genre_ordering() {
    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let engine = RecommendationEngine::new(&catalog);

    assert_eq!(
        engine.recommend_with(StrategyKind::Hybrid, &user, 10),
        engine.recommend_with(StrategyKind::Genre, &user, 10)
    );
}

#[test]
fn test_rating_strategy_breaks_ties_by_catalog_order() {
    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let engine = RecommendationEngine::new(&catalog).with_strategy(StrategyKind::Rating);

    let recommendations = engine.recommend(&user, 10);

    assert_eq!(ids(&recommendations), vec!["M005", "M004", "M006", "M007", "M008"]);
}

#[test]
fn test_signed_zero_ratings_keep_catalog_order() {
    let catalog = Catalog::from_movies(vec![
        Movie::new("M001", "Flop", "Drama", 2000, -0.0),
        Movie::new("M002", "Dud", "Drama", 2000, 0.0),
    ]);
    let user = UserProfile::new("zoe", "pw");
    let engine = RecommendationEngine::new(&catalog).with_strategy(StrategyKind::Rating);

    assert_eq!(ids(&engine.recommend(&user, 5)), vec!["M001", "M002"]);
}

#[test]
fn test_year_strategy_newest_first() {
    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let engine = RecommendationEngine::new(&catalog).with_strategy(StrategyKind::Year);

    let recommendations = engine.recommend(&user, 10);

    assert_eq!(ids(&recommendations), vec!["M004", "M008", "M007", "M006", "M005"]);
}

#[test]
fn test_never_recommends_excluded_movies() {
    let catalog = sample_catalog();
    let users = vec![
        sci_fi_fan(),
        UserProfile::with_lists("bob", "pw", Watchlist::parse("M005;M008"), History::new()),
        UserProfile::with_lists("eric", "pw", Watchlist::new(), History::parse("M004")),
    ];
    let engine = RecommendationEngine::new(&catalog);

    for user in &users {
        let excluded = user.excluded_ids();
        for kind in StrategyKind::ALL {
            for movie in engine.recommend_with(kind, user, catalog.len()) {
                assert!(
                    !excluded.contains(movie.id.as_str()),
                    "{} recommended excluded movie {} to {}",
                    kind,
                    movie.id,
                    user.username
                );
            }
        }
    }
}

#[test]
fn test_result_length_is_min_of_request_and_pool() {
    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let pool_size = catalog.len() - user.excluded_ids().len();
    let engine = RecommendationEngine::new(&catalog);

    for kind in StrategyKind::ALL {
        for top_n in 0..=12 {
            let recommendations = engine.recommend_with(kind, &user, top_n);
            assert_eq!(recommendations.len(), top_n.min(pool_size), "{} with top_n={}", kind, top_n);
        }
    }
}

#[test]
fn test_non_positive_count_uses_default() {
    assert_eq!(resolve_count(None, DEFAULT_RECOMMENDATION_COUNT), 5);
    assert_eq!(resolve_count(Some(0), DEFAULT_RECOMMENDATION_COUNT), 5);
    assert_eq!(resolve_count(Some(-4), DEFAULT_RECOMMENDATION_COUNT), 5);
    assert_eq!(resolve_count(Some(3), DEFAULT_RECOMMENDATION_COUNT), 3);
    assert_eq!(resolve_count(Some(50), DEFAULT_RECOMMENDATION_COUNT), 50);

    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let engine = RecommendationEngine::new(&catalog);
    let count = resolve_count(Some(-1), DEFAULT_RECOMMENDATION_COUNT);
    assert_eq!(engine.recommend(&user, count).len(), 5);
}

#[test]
fn test_recommend_is_idempotent() {
    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let engine = RecommendationEngine::new(&catalog);

    for kind in StrategyKind::ALL {
        let first = engine.recommend_with(kind, &user, 10);
        let second = engine.recommend_with(kind, &user, 10);
        assert_eq!(ids(&first), ids(&second));
    }
}

#[test]
fn test_higher_affinity_wins_at_equal_rating() {
    let catalog = Catalog::from_movies(vec![
        Movie::new("M001", "Seen Western", "Western", 1990, 6.0),
        Movie::new("M002", "Seen Noir A", "Noir", 1950, 6.0),
        Movie::new("M003", "Seen Noir B", "Noir", 1951, 6.0),
        Movie::new("M010", "Western Pick", "Western", 2000, 7.5),
        Movie::new("M011", "Noir Pick", "Noir", 2001, 7.5),
    ]);
    let user = UserProfile::with_lists("noir", "pw", Watchlist::parse("M003"), History::parse("M001;M002"));
    let engine = RecommendationEngine::new(&catalog).with_strategy(StrategyKind::Genre);

    let recommendations = engine.recommend(&user, 2);

    assert_eq!(ids(&recommendations), vec!["M011", "M010"]);
}

#[test]
fn test_watching_a_listed_movie_keeps_it_excluded() {
    let catalog = sample_catalog();
    let mut user = UserProfile::with_lists("alice", "pw", Watchlist::parse("M001"), History::new());
    let engine = RecommendationEngine::new(&catalog);

    let before = GenreAffinity::from_profile(&catalog, &user);
    user.mark_watched("M001");
    let after = GenreAffinity::from_profile(&catalog, &user);

    assert!(user.history().contains("M001"));
    assert!(!user.watchlist().contains("M001"));
    assert_eq!(before.score("Sci-Fi"), 1);
    assert_eq!(after.score("Sci-Fi"), 1);

    for kind in StrategyKind::ALL {
        let recommendations = engine.recommend_with(kind, &user, catalog.len());
        assert_eq!(recommendations.len(), catalog.len() - 1);
        assert!(recommendations.iter().all(|m| m.id != "M001"));
    }
}

#[test]
fn test_engine_does_not_touch_user_or_strategy() {
    let catalog = sample_catalog();
    let user = sci_fi_fan();
    let snapshot = user.clone();
    let engine = RecommendationEngine::new(&catalog).with_strategy(StrategyKind::Year);

    engine.recommend_with(StrategyKind::Genre, &user, 3);

    assert_eq!(user, snapshot);
    assert_eq!(engine.current_strategy(), StrategyKind::Year);
}

#[test]
fn test_empty_catalog_yields_nothing() {
    let catalog = Catalog::new();
    let user = sci_fi_fan();
    let engine = RecommendationEngine::new(&catalog);

    for kind in StrategyKind::ALL {
        assert!(engine.recommend_with(kind, &user, 5).is_empty());
    }
}
