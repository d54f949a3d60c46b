use super::*;

fn def(counts: &[usize]) -> ImageSetDef {
    ImageSetDef {
        items: counts
            .iter()
            .enumerate()
            .map(|(i, &n)| ItemDef {
                name: format!("item-{i}"),
                description: format!("description {i}"),
                images: (0..n).map(|j| format!("img-{i}-{j}.avif")).collect(),
            })
            .collect(),
    }
}

#[test]
fn slide_count_sums_per_item_images() {
    let set = ImageSet::from_def(def(&[2, 1, 3])).unwrap();
    assert_eq!(set.slide_count(), 6);
    assert!(!set.is_empty());
}

#[test]
fn slide_to_item_mapping_walks_cumulative_ranges() {
    let set = ImageSet::from_def(def(&[2, 1, 3])).unwrap();
    for (slide, owner) in [(0, 0), (1, 0), (2, 1), (3, 2), (4, 2), (5, 2)] {
        let (idx, item) = set.item_for_slide(SlideIndex(slide)).unwrap();
        assert_eq!(idx, owner);
        assert_eq!(item.name, format!("item-{owner}"));
    }
    assert!(set.item_for_slide(SlideIndex(6)).is_none());
}

#[test]
fn image_ref_indexes_the_flattened_sequence() {
    let set = ImageSet::from_def(def(&[2, 1, 3])).unwrap();
    assert_eq!(set.image_ref(SlideIndex(0)), Some("img-0-0.avif"));
    assert_eq!(set.image_ref(SlideIndex(1)), Some("img-0-1.avif"));
    assert_eq!(set.image_ref(SlideIndex(2)), Some("img-1-0.avif"));
    assert_eq!(set.image_ref(SlideIndex(5)), Some("img-2-2.avif"));
    assert_eq!(set.image_ref(SlideIndex(6)), None);
}

#[test]
fn empty_set_is_allowed_and_degenerate() {
    let set = ImageSet::from_def(ImageSetDef::default()).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.slide_count(), 0);
    assert!(set.item_for_slide(SlideIndex(0)).is_none());
    assert!(set.image_ref(SlideIndex(0)).is_none());
}

#[test]
fn imageless_item_fails_validation() {
    let mut d = def(&[2]);
    d.items[0].images.clear();
    let err = ImageSet::from_def(d).unwrap_err();
    assert!(err.to_string().contains("at least one image"));
}

#[test]
fn blank_item_name_fails_validation() {
    let mut d = def(&[1]);
    d.items[0].name = "  ".to_owned();
    assert!(ImageSet::from_def(d).is_err());
}

#[test]
fn blank_image_ref_fails_validation() {
    let mut d = def(&[1]);
    d.items[0].images[0] = String::new();
    assert!(ImageSet::from_def(d).is_err());
}

#[test]
fn from_reader_parses_and_validates_json() {
    let json = r#"{
        "items": [
            { "name": "Japanese Ramen", "images": ["ramen.avif", "ramen-2.avif"] },
            { "name": "Yuzu Kombucha", "description": "house made", "images": ["yuzu.avif"] }
        ]
    }"#;
    let set = ImageSet::from_reader(json.as_bytes()).unwrap();
    assert_eq!(set.slide_count(), 3);
    assert_eq!(set.items()[1].description, "house made");

    let err = ImageSet::from_reader(&b"{ not json"[..]).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn captioned_images_build_one_item_per_slide() {
    let d = ImageSetDef::from_captioned_images([
        ("Interior view 1", "interior-1.avif"),
        ("Interior view 2", "interior-2.avif"),
    ]);
    let set = ImageSet::from_def(d).unwrap();
    assert_eq!(set.slide_count(), 2);
    let (idx, item) = set.item_for_slide(SlideIndex(1)).unwrap();
    assert_eq!(idx, 1);
    assert_eq!(item.name, "Interior view 2");
    assert_eq!(item.images, vec!["interior-2.avif".to_owned()]);
}

#[test]
fn collection_rejects_duplicate_or_blank_category_ids() {
    let mut coll = CollectionDef {
        categories: vec![
            CategoryDef {
                id: "signature".to_owned(),
                name: "Menu Favourites".to_owned(),
                items: def(&[1]).items,
            },
            CategoryDef {
                id: "signature".to_owned(),
                name: "Signature Dishes".to_owned(),
                items: def(&[1]).items,
            },
        ],
    };
    let err = coll.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate category id"));

    coll.categories[1].id = " ".to_owned();
    assert!(coll.validate().is_err());
}

#[test]
fn collection_categories_build_independent_sets() {
    let coll = CollectionDef {
        categories: vec![
            CategoryDef {
                id: "signature".to_owned(),
                name: "Menu Favourites".to_owned(),
                items: def(&[2, 1]).items,
            },
            CategoryDef {
                id: "pairing".to_owned(),
                name: "Pairing".to_owned(),
                items: Vec::new(),
            },
        ],
    };
    coll.validate().unwrap();

    let sets: Vec<ImageSet> = coll
        .categories
        .iter()
        .map(|c| c.image_set().unwrap())
        .collect();
    assert_eq!(sets[0].slide_count(), 3);
    assert!(sets[1].is_empty());
}
