//! Sports navigation parsing and discovery against a realistic page.

use std::sync::Arc;

use ncaa_casablanca::config::Config;
use ncaa_casablanca::container::Container;
use ncaa_casablanca::error::AppError;
use ncaa_casablanca::sports::{
    DefaultGenderResolver, Gender, NcaaSportsService, ReqwestHtmlFetcher, Season, Sport,
    filter_sports, parse_sports, sort_sports,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const NAV_PAGE: &str = include_str!("fixtures/sports_nav.html");
const BASE: &str = "https://www.ncaa.com";

fn parse_fixture() -> Vec<Sport> {
    parse_sports(NAV_PAGE, BASE, &DefaultGenderResolver::new()).unwrap()
}

fn find<'a>(sports: &'a [Sport], name: &str) -> Vec<&'a Sport> {
    sports.iter().filter(|s| s.name == name).collect()
}

#[test]
fn test_gendered_pair_without_parent() {
    let sports = parse_fixture();
    let soccer = find(&sports, "Soccer");

    assert_eq!(soccer.len(), 2);
    assert_eq!(soccer[0].gender, Gender::Men);
    assert_eq!(soccer[1].gender, Gender::Women);
    assert!(soccer.iter().all(|s| s.season == Season::Fall));
    assert_eq!(
        soccer[0].url.as_deref(),
        Some("https://www.ncaa.com/sports/soccer/men/d1")
    );
}

#[test]
fn test_unqualified_entries_take_defaults() {
    let sports = parse_fixture();

    let football = find(&sports, "Football");
    assert_eq!(football.len(), 1);
    assert_eq!(football[0].gender, Gender::Men);

    assert_eq!(find(&sports, "Field Hockey")[0].gender, Gender::Women);
    assert_eq!(find(&sports, "Rifle")[0].gender, Gender::Coed);
    assert_eq!(find(&sports, "Softball")[0].gender, Gender::Women);
    assert_eq!(find(&sports, "Baseball")[0].gender, Gender::Men);
}

#[test]
fn test_parent_entry_dropped_only_when_gendered_sibling_exists() {
    let sports = parse_fixture();

    let volleyball = find(&sports, "Volleyball");
    assert_eq!(volleyball.len(), 1);
    assert_eq!(volleyball[0].gender, Gender::Women);

    let lacrosse = find(&sports, "Lacrosse");
    assert_eq!(lacrosse.len(), 2);
    assert!(lacrosse.iter().all(|s| s.gender != Gender::Unspecified));

    let cross_country = find(&sports, "Cross Country");
    assert_eq!(cross_country.len(), 1);
    assert_eq!(cross_country[0].gender, Gender::Unspecified);
    assert_eq!(cross_country[0].url, None);

    let cricket = find(&sports, "Cricket");
    assert_eq!(cricket[0].gender, Gender::Unspecified);
}

#[test]
fn test_suffix_case_and_skipped_entries() {
    let sports = parse_fixture();

    let basketball = find(&sports, "Basketball");
    assert_eq!(basketball.len(), 2);
    assert_eq!(basketball[1].gender, Gender::Women);

    // Outside the nav, empty text, and a block without a header
    assert!(find(&sports, "Ignored").is_empty());
    assert!(find(&sports, "Unlabelled").is_empty());
    assert!(sports.iter().all(|s| !s.name.trim().is_empty()));

    assert_eq!(sports.len(), 15);
}

#[test]
fn test_custom_resolver_defaults() {
    let mut resolver = DefaultGenderResolver::new();
    resolver.register_default("Cricket", Gender::Coed);

    let sports = parse_sports(NAV_PAGE, BASE, &resolver).unwrap();
    assert_eq!(find(&sports, "Cricket")[0].gender, Gender::Coed);
}

#[test]
fn test_filter_and_sort_for_presentation() {
    let mut spring_women = filter_sports(parse_fixture(), Some(Season::Spring), Some(Gender::Women));
    sort_sports(&mut spring_women);

    let names: Vec<&str> = spring_women.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Lacrosse", "Softball"]);

    let mut all = parse_fixture();
    sort_sports(&mut all);
    assert_eq!(all.first().map(|s| s.season), Some(Season::Fall));
    assert_eq!(all.last().map(|s| s.season), Some(Season::Spring));
}

#[tokio::test]
async fn test_service_fetches_page_over_http() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NAV_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config {
        sports_page_url: format!("{}/", mock_server.uri()),
        ..Config::default()
    };
    let service = Container::new(config).unwrap().ncaa_sports_service().unwrap();
    let sports = service.get_sports().await.unwrap();

    // Relative links resolve against the page actually fetched
    let soccer = find(&sports, "Soccer");
    assert_eq!(
        soccer[0].url,
        Some(format!("{}/sports/soccer/men/d1", mock_server.uri()))
    );
    // Absolute links are kept
    assert_eq!(
        find(&sports, "Skiing")[0].url.as_deref(),
        Some("https://www.ncaa.com/sports/skiing")
    );
}

#[tokio::test]
async fn test_service_reports_missing_navigation() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>Down for maintenance</body></html>"))
        .mount(&mock_server)
        .await;

    let service = NcaaSportsService::with_page_url(
        Arc::new(ReqwestHtmlFetcher::new(5).unwrap()),
        Arc::new(DefaultGenderResolver::new()),
        mock_server.uri(),
    );

    assert!(matches!(service.get_sports().await, Err(AppError::HtmlParse(_))));
}

#[tokio::test]
async fn test_service_reports_http_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = NcaaSportsService::with_page_url(
        Arc::new(ReqwestHtmlFetcher::new(5).unwrap()),
        Arc::new(DefaultGenderResolver::new()),
        mock_server.uri(),
    );

    let err = service.get_sports().await.unwrap_err();
    assert!(err.is_client_error());
}
