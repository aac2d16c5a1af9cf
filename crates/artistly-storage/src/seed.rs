//! Artistas con los que arranca el catálogo.

use artistly_core::domain::{Artist, ArtistId, Rating};

struct SeedArtist {
  id: &'static str,
  name: &'static str,
  artist_type: &'static str,
  location: &'static str,
  image_url: &'static str,
  genres: &'static [&'static str],
  price_range: &'static str,
  rating: f32,
  description: &'static str,
  booking_price: u64,
}

const SEED: [SeedArtist; 10] = [
  SeedArtist {
    id: "1",
    name: "Arijit Singh",
    artist_type: "Bollywood Singer",
    location: "Mumbai, India",
    image_url: "/images/artist-arijit.jpg",
    genres: &["Bollywood", "Pop", "Romantic"],
    price_range: "₹1,00,000+",
    rating: 4.9,
    description: "The soulful voice of Bollywood, known for his emotive ballads.",
    booking_price: 150_000,
  },
  SeedArtist {
    id: "2",
    name: "Shiamak Davar",
    artist_type: "Choreographer/Dancer",
    location: "Mumbai, India",
    image_url: "/images/artist-shiamak.jpg",
    genres: &["Bollywood", "Contemporary", "Jazz"],
    price_range: "₹50,000 - ₹1,00,000",
    rating: 4.8,
    description: "Renowned choreographer and dance guru, pioneer of contemporary dance in India.",
    booking_price: 75_000,
  },
  SeedArtist {
    id: "3",
    name: "Zakir Khan",
    artist_type: "Stand-up Comedian",
    location: "Delhi, India",
    image_url: "/images/artist-zakir.jpg",
    genres: &["Comedy", "Storytelling", "Observational"],
    price_range: "₹20,000 - ₹50,000",
    rating: 4.7,
    description: "Popular Indian stand-up comedian known for his 'Sakht Launda' persona.",
    booking_price: 40_000,
  },
  SeedArtist {
    id: "4",
    name: "Nucleya",
    artist_type: "Electronic DJ",
    location: "Goa, India",
    image_url: "/images/artist-nucleya.jpg",
    genres: &["EDM", "Bass", "Folkstep"],
    price_range: "₹50,000 - ₹1,00,000",
    rating: 4.8,
    description: "Pioneer of Indian electronic music, famous for his bass-heavy tracks.",
    booking_price: 80_000,
  },
  SeedArtist {
    id: "5",
    name: "Indian Ocean",
    artist_type: "Fusion Rock Band",
    location: "Delhi, India",
    image_url: "/images/artist-indianocean.jpg",
    genres: &["Fusion", "Folk Rock", "Progressive Rock"],
    price_range: "₹50,000 - ₹1,00,000",
    rating: 4.6,
    description: "One of India's most influential and experimental rock bands.",
    booking_price: 65_000,
  },
  SeedArtist {
    id: "6",
    name: "Shreya Ghoshal",
    artist_type: "Playback Singer",
    location: "Mumbai, India",
    image_url: "/images/artist-shreya.jpg",
    genres: &["Bollywood", "Classical", "Regional"],
    price_range: "₹1,00,000+",
    rating: 4.9,
    description: "The melody queen of Indian cinema, with a vast vocal range.",
    booking_price: 120_000,
  },
  SeedArtist {
    id: "7",
    name: "Raja Kumari",
    artist_type: "Hip-Hop Artist",
    location: "Los Angeles, USA",
    image_url: "/images/artist-raja.jpg",
    genres: &["Hip-Hop", "Rap", "Indian Fusion"],
    price_range: "₹20,000 - ₹50,000",
    rating: 4.5,
    description: "An American rapper, singer, and songwriter of Indian descent.",
    booking_price: 35_000,
  },
  SeedArtist {
    id: "8",
    name: "Bhuban Badyakar",
    artist_type: "Viral Singer",
    location: "West Bengal, India",
    image_url: "/images/artist-bhuban.jpg",
    genres: &["Folk", "Viral"],
    price_range: "Under ₹20,000",
    rating: 3.5,
    description: "Internet sensation known for his viral song 'Kacha Badam'.",
    booking_price: 15_000,
  },
  SeedArtist {
    id: "9",
    name: "Priya Mani",
    artist_type: "Classical Dancer",
    location: "Chennai, India",
    image_url: "/images/artist-priya.jpg",
    genres: &["Bharatanatyam", "Classical", "Devotional"],
    price_range: "₹20,000 - ₹50,000",
    rating: 4.7,
    description: "An exquisite Bharatanatyam performer and teacher.",
    booking_price: 28_000,
  },
  SeedArtist {
    id: "10",
    name: "Kenny Sebastian",
    artist_type: "Stand-up Comedian",
    location: "Bangalore, India",
    image_url: "/images/artist-kenny.jpg",
    genres: &["Comedy", "Musical Comedy"],
    price_range: "₹20,000 - ₹50,000",
    rating: 4.6,
    description: "Popular Indian stand-up comedian known for his relatable observational humor.",
    booking_price: 38_000,
  },
];

/// Los diez artistas semilla, en orden de id.
pub fn seed_artists() -> Vec<Artist> {
  SEED
    .iter()
    .filter_map(|s| {
      Some(Artist {
        id: ArtistId::from(s.id),
        name: s.name.to_string(),
        artist_type: s.artist_type.to_string(),
        location: s.location.to_string(),
        image_url: s.image_url.to_string(),
        genres: s.genres.iter().map(|g| g.to_string()).collect(),
        price_range: s.price_range.to_string(),
        rating: Rating::new(s.rating)?,
        description: Some(s.description.to_string()),
        booking_price: Some(s.booking_price),
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_core::domain::PriceBucket;

  #[test]
  fn all_seed_records_are_valid() {
    assert_eq!(seed_artists().len(), SEED.len());
  }

  #[test]
  fn every_seed_price_range_is_reachable() {
    for artist in seed_artists() {
      assert!(!PriceBucket::classify(&artist.price_range).is_empty(), "{} is unreachable", artist.name);
    }
  }
}
