#[cfg(test)]
mod wire_models {
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    use flatly::clients::helpers::{join_url, resolve_image_url};
    use flatly::models::booking::{Booking, BookingStatus};
    use flatly::models::flat::Flat;
    use flatly::models::office::Office;
    use flatly::models::reservation::Reservation;

    #[test]
    fn new_booking_omits_id() {
        let booking = Booking::new_active(
            5,
            1,
            "a@b.co".to_string(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            "Flatly",
        );
        let value: Value = serde_json::to_value(&booking).unwrap();
        assert_eq!(
            value,
            json!({
                "flatId": 5,
                "userId": 1,
                "userEmail": "a@b.co",
                "startDate": "2025-03-01",
                "endDate": "2025-03-10",
                "status": "ACTIVE",
                "system": "Flatly"
            })
        );
    }

    #[test]
    fn cancelled_status_decodes() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 9, "flatId": 5, "userId": 1, "userEmail": "a@b.co",
            "startDate": "2025-03-01", "endDate": "2025-03-10",
            "status": "CANCELLED", "system": "Flatly"
        }))
        .unwrap();
        assert_eq!(booking.id, Some(9));
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert_eq!(booking.status.to_string(), "CANCELLED");
    }

    #[test]
    fn sparse_flat_decodes_with_defaults() {
        let flat: Flat = serde_json::from_value(json!({
            "id": 1, "name": "Studio", "price": 1800
        }))
        .unwrap();
        assert_eq!(flat.price, 1800.0);
        assert!(flat.images.is_empty());
        assert_eq!(flat.first_image(), None);
        assert_eq!(flat.distance, None);
    }

    #[test]
    fn flat_with_null_columns_decodes() {
        let flat: Flat = serde_json::from_value(json!({
            "id": 2, "name": "Attic", "location": "Gdańsk", "price": 1500.0,
            "description": null, "distance": null, "amenities": null,
            "availability": null, "images": null, "roomNumber": 1
        }))
        .unwrap();
        assert_eq!(flat.description, "");
        assert!(flat.amenities.is_empty());
        assert_eq!(flat.availability, "");
        assert_eq!(flat.first_image(), None);
        assert_eq!(flat.room_number, 1);
    }

    #[test]
    fn one_flat_without_images_keeps_the_list() {
        let flats: Vec<Flat> = serde_json::from_str(
            r#"[
                {"id":1,"name":"Loft","location":"Kraków","price":2100,"images":["a.jpg"],"roomNumber":2},
                {"id":2,"name":"Attic","location":"Gdańsk","price":1500,"images":null,"amenities":null,"roomNumber":1}
            ]"#,
        )
        .unwrap();
        assert_eq!(flats.len(), 2);
        assert_eq!(flats[0].first_image(), Some("a.jpg"));
        assert!(flats[1].images.is_empty());
    }

    #[test]
    fn office_with_null_columns_decodes() {
        let offices: Vec<Office> = serde_json::from_value(json!([{
            "id": 4, "name": "Desk 4", "metricArea": null, "floor": null,
            "roomNumber": null, "country": null, "city": null, "postalCode": null,
            "address": null, "price": "80", "images": null, "amenities": null
        }]))
        .unwrap();
        let office = &offices[0];
        assert_eq!(office.price, 80.0);
        assert_eq!(office.city, "");
        assert_eq!(office.address, "");
        assert!(office.images.is_empty());
        assert!(office.amenities.is_empty());
        assert_eq!(office.thumbnail(), None);
    }

    #[test]
    fn unknown_flat_placeholder() {
        let flat = Flat::unknown(3);
        assert_eq!(flat.id, 3);
        assert_eq!(flat.name, "Unknown Flat");
        assert!(flat.images.is_empty());
    }

    #[test]
    fn reservation_defaults() {
        let reservation = Reservation::pending(
            2,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 3).unwrap(),
        );
        let value: Value = serde_json::to_value(&reservation).unwrap();
        assert_eq!(value["officeId"], json!(2));
        assert_eq!(value["status"], json!("PENDING"));
        assert_eq!(value["endTime"], json!("2025-04-03"));
        assert_eq!(value["comments"], json!("No special requests"));
    }

    #[test]
    fn image_urls_resolve_against_backend() {
        assert_eq!(
            resolve_image_url("http://3.67.172.45:8080", "uploads/a.jpg"),
            "http://3.67.172.45:8080/uploads/a.jpg"
        );
        assert_eq!(
            resolve_image_url("http://3.67.172.45:8080/", "/uploads/a.jpg"),
            "http://3.67.172.45:8080/uploads/a.jpg"
        );
        assert_eq!(
            resolve_image_url("http://3.67.172.45:8080", "https://s3.example.com/a.jpg"),
            "https://s3.example.com/a.jpg"
        );
        assert_eq!(join_url("http://h/", "/offices"), "http://h/offices");
    }
}

#[cfg(test)]
mod config_and_store {
    use std::fs;

    use flatly::config::{self, parse_config, read_config_from, DEFAULT_OFFICES_API_URL};
    use flatly::services::email_store::{
        last_email, remember_email, FileStore, KeyValueStore, USER_EMAIL_KEY,
    };
    use tempfile::tempdir;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            flats_api_url = "http://localhost:8080"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.flats_api_url, "http://localhost:8080");
        assert_eq!(config.offices_api_url, DEFAULT_OFFICES_API_URL);
        assert_eq!(config.user_id, 1);
        assert_eq!(config.system_tag, "Flatly");
        assert_eq!(config.request_timeout_seconds, None);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(parse_config("user_id = \"one\"").is_err());
    }

    #[test]
    fn config_without_path_uses_defaults() {
        let config = read_config_from(None).unwrap();
        assert_eq!(config.offices_api_url, DEFAULT_OFFICES_API_URL);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn config_is_read_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flatly.toml");
        fs::write(&path, "user_id = 7\nlog_level = \"warn\"\n").unwrap();

        let config = read_config_from(path.to_str()).unwrap();
        assert_eq!(config.user_id, 7);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Warn);

        let missing = dir.path().join("missing.toml");
        assert!(read_config_from(missing.to_str()).is_err());
    }

    #[test]
    fn test_config_points_at_localhost() {
        let config = config::create_test_config();
        assert!(config.flats_api_url.starts_with("http://127.0.0.1"));
        assert_ne!(config.flats_api_url, config.offices_api_url);
    }

    #[test]
    fn file_store_round_trip_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");
        let store = FileStore::new(&path);

        assert_eq!(last_email(&store), None);
        remember_email(&store, "a@b.co");
        store.set("theme", "dark").unwrap();

        assert_eq!(last_email(&store), Some("a@b.co".to_string()));
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get(USER_EMAIL_KEY).unwrap(),
            Some("a@b.co".to_string())
        );
    }

    #[test]
    fn corrupt_store_reads_as_no_email() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);

        assert!(store.get(USER_EMAIL_KEY).is_err());
        assert_eq!(last_email(&store), None);
        // A failed write is swallowed.
        remember_email(&store, "a@b.co");
    }
}
