use serde::Deserialize;

/// A single artwork as returned by the `/artworks` endpoint.
///
/// Only the displayed fields are decoded; every other key in the API
/// payload is ignored. `null` and missing keys both become `None`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArtworkRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_title: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl ArtworkRecord {
    pub fn new(id: u64) -> Self {
        ArtworkRecord {
            id,
            title: None,
            place_of_origin: None,
            artist_title: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

/// Pagination block of a page response
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

/// One page of artworks
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArtworkPage {
    pub data: Vec<ArtworkRecord>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_with_nulls_and_extra_keys() {
        let body = r#"{
            "pagination": {"total": 129884, "limit": 12, "offset": 0, "total_pages": 10824, "current_page": 1},
            "data": [
                {"id": 4, "title": "Priest and Boy", "place_of_origin": "Paris",
                 "artist_title": "Lawrence Carmichael Earle", "inscriptions": null,
                 "date_start": 1880, "date_end": 1880, "is_boosted": false},
                {"id": 7, "title": null, "date_start": null}
            ],
            "info": {"license_text": "..."}
        }"#;

        let page: ArtworkPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.pagination.total, 129884);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].title.as_deref(), Some("Priest and Boy"));
        assert_eq!(page.data[0].inscriptions, None);
        assert_eq!(page.data[0].date_end, Some(1880));
        assert_eq!(page.data[1], ArtworkRecord::new(7));
    }

    #[test]
    fn test_negative_years_decode() {
        let rec: ArtworkRecord =
            serde_json::from_str(r#"{"id": 1, "date_start": -500, "date_end": -400}"#).unwrap();
        assert_eq!(rec.date_start, Some(-500));
        assert_eq!(rec.date_end, Some(-400));
    }
}
