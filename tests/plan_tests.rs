//! End-to-end compose-plan tests over a temporary job tree.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use aizine::{
    build_plan, AizineError, ComposePlan, JobRef, Orientation, PlannerOptions, Settings,
};

/// Write a real raster file so dimension probing exercises the actual
/// decoder path
fn write_photo(dir: &Path, name: &str, width: u32, height: u32) {
    let img = image::RgbImage::new(width, height);
    img.save(dir.join(name)).expect("save test image");
}

fn make_job(base: &Path, job_id: &str, meta_json: &str) {
    let job = base.join("jobs").join(job_id);
    for sub in ["input", "meta", "output"] {
        fs::create_dir_all(job.join(sub)).unwrap();
    }
    fs::write(job.join("meta").join("meta.json"), meta_json).unwrap();
}

fn seeded(seed: u64) -> PlannerOptions {
    PlannerOptions {
        seed: Some(seed),
        shuffle_interior: true,
    }
}

mod build_plan_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_five_photo_scenario() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::from_base(tmp.path());
        make_job(
            tmp.path(),
            "job1",
            r#"{"theme": "custom", "pages": 16, "client_name": "Anna"}"#,
        );

        let input = tmp.path().join("jobs/job1/input");
        // 3 vertical, 2 horizontal
        write_photo(&input, "a.jpg", 100, 130);
        write_photo(&input, "b.jpg", 100, 130);
        write_photo(&input, "c.jpg", 100, 130);
        write_photo(&input, "d.jpg", 130, 100);
        write_photo(&input, "e.jpg", 130, 100);

        let plan = build_plan(&settings, &JobRef::Id("job1".to_string()), seeded(42))
            .expect("build plan");

        // 5 photos -> 6 pages, never the advisory 16 from the brief
        assert_eq!(plan.meta.pages, 6);
        assert_eq!(plan.placements.len(), 5);

        let labels: Vec<&str> = plan.placements.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "COVER_IMAGE",
                "PAGE_01_IMG_01",
                "PAGE_02_IMG_01",
                "PAGE_03_IMG_01",
                "BACK_IMAGE"
            ]
        );

        // verticals exist, so both covers must be vertical
        assert_eq!(plan.placements[0].orientation, Orientation::Vertical);
        assert_eq!(
            plan.placements.last().unwrap().orientation,
            Orientation::Vertical
        );

        // every placement references a file that exists
        for placement in &plan.placements {
            assert!(placement.photo_path.exists(), "{:?}", placement.photo_path);
        }

        // the persisted plan round-trips
        let on_disk =
            ComposePlan::from_json(&tmp.path().join("jobs/job1/meta/compose_plan.json"))
                .expect("read plan back");
        assert_eq!(on_disk.placements.len(), 5);
        assert_eq!(on_disk.meta.job_id, "job1");
        assert_eq!(on_disk.texts.cover_title, "Anna");
        assert_eq!(on_disk.texts.client_name, "Anna");
    }

    #[test]
    fn test_same_seed_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::from_base(tmp.path());
        make_job(tmp.path(), "job1", r#"{"theme": "custom"}"#);

        let input = tmp.path().join("jobs/job1/input");
        for i in 0..7 {
            let (w, h) = if i % 2 == 0 { (100, 130) } else { (130, 100) };
            write_photo(&input, &format!("p{i}.jpg"), w, h);
        }

        let job = JobRef::Id("job1".to_string());
        let first = build_plan(&settings, &job, seeded(7)).unwrap();
        let second = build_plan(&settings, &job, seeded(7)).unwrap();

        let a = serde_json::to_string(&first.placements).unwrap();
        let b = serde_json::to_string(&second.placements).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unreadable_photo_is_kept_as_unknown() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::from_base(tmp.path());
        make_job(tmp.path(), "job1", r#"{"theme": "custom"}"#);

        let input = tmp.path().join("jobs/job1/input");
        write_photo(&input, "good.jpg", 100, 130);
        fs::write(input.join("broken.jpg"), b"this is not a jpeg").unwrap();
        fs::write(input.join("ignored.txt"), b"not an image at all").unwrap();

        let plan =
            build_plan(&settings, &JobRef::Id("job1".to_string()), seeded(1)).expect("plan");

        // broken.jpg occupies a slot, ignored.txt does not
        assert_eq!(plan.placements.len(), 2);
        assert!(plan
            .placements
            .iter()
            .any(|p| p.filename == "broken.jpg" && p.orientation == Orientation::Unknown));
    }

    #[test]
    fn test_missing_job_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::from_base(tmp.path());

        let result = build_plan(&settings, &JobRef::Id("ghost".to_string()), seeded(1));
        assert!(matches!(result, Err(AizineError::JobNotFound(_))));
    }

    #[test]
    fn test_empty_input_is_hard_failure() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::from_base(tmp.path());
        make_job(tmp.path(), "job1", r#"{"theme": "custom"}"#);

        let result = build_plan(&settings, &JobRef::Id("job1".to_string()), seeded(1));
        assert!(matches!(result, Err(AizineError::NoPhotos(_))));
    }

    #[test]
    fn test_unmapped_theme_is_template_not_found() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::from_base(tmp.path());
        make_job(tmp.path(), "job1", r#"{"theme": "no_such_theme"}"#);

        let input = tmp.path().join("jobs/job1/input");
        write_photo(&input, "a.jpg", 100, 130);

        let result = build_plan(&settings, &JobRef::Id("job1".to_string()), seeded(1));
        assert!(matches!(
            result,
            Err(AizineError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_explicit_job_path_and_mapping_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::from_base(tmp.path());

        let config_dir = tmp.path().join("data/config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("templates_map.json"),
            r#"{
                "lavstory": [
                    {"name": "wedding", "pages": 16, "path": "data/templates/lav/wedding16.indd"},
                    {"name": "other", "pages": 12, "path": "data/templates/lav/other12.indd"}
                ]
            }"#,
        )
        .unwrap();

        make_job(
            tmp.path(),
            "job2",
            r#"{"brief": {"theme": "lavstory", "category": "wedding", "pages": 16}}"#,
        );
        write_photo(&tmp.path().join("jobs/job2/input"), "a.jpg", 100, 100);

        let job_path = tmp.path().join("jobs/job2");
        let plan = build_plan(&settings, &JobRef::Path(job_path), seeded(1)).expect("plan");

        assert_eq!(plan.meta.job_id, "job2");
        assert_eq!(plan.meta.theme, "lavstory");
        assert!(plan
            .meta
            .template
            .ends_with("data/templates/lav/wedding16.indd"));
        assert_eq!(plan.texts.cover_title, "Our Love Story");
    }
}
