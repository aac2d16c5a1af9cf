use artistly_core::catalog::Criteria;
use artistly_core::onboarding::ArtistDraft;
use artistly_core::services::CatalogService;
use artistly_storage::InMemoryArtistStore;

fn main() {
  let service = CatalogService::new(InMemoryArtistStore::seeded());

  let draft = ArtistDraft {
    name: "Smoke Test Band".to_string(),
    artist_type: "Fusion Rock Band".to_string(),
    location: "Pune, India".to_string(),
    genres: vec!["Fusion".to_string()],
    price_range: "₹50,000 - ₹1,00,000".to_string(),
    rating: 4.0,
    ..Default::default()
  };

  let artist = service.onboard(&draft).expect("failed to onboard artist");
  println!("Onboarded artist with id = {}", artist.id);

  let found = service.browse(&Criteria::default().with_search("smoke")).expect("failed to query catalog");
  println!("Found in catalog: {found:?}");
}
