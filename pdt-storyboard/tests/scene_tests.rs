use pdt_storyboard::{next_scene_number, renumber, Frame, Scene, DEFAULT_IMAGE_SOURCE};

#[test]
fn new_scene_is_blank() {
    let scene = Scene::new(3);
    assert_eq!(scene.scene, 3);
    assert_eq!(scene.start_frame, Frame::default());
    assert_eq!(scene.end_frame.image_source, DEFAULT_IMAGE_SOURCE);
    assert!(scene.video_prompt.is_none());
    assert_eq!(scene.image_urls().count(), 0);
}

#[test]
fn scenes_compare_by_value() {
    let mut a = Scene::new(1);
    let mut b = Scene::new(1);
    assert_eq!(a, b);

    a.video_operation = Some(serde_json::json!({"name": "op"}));
    assert_ne!(a, b);
    b.video_operation = Some(serde_json::json!({"name": "op"}));
    assert_eq!(a, b);
}

#[test]
fn renumber_is_one_based_in_order() {
    let mut scenes = vec![Scene::new(7), Scene::new(3), Scene::new(9)];
    renumber(&mut scenes);
    let numbers: Vec<u32> = scenes.iter().map(|s| s.scene).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn next_number() {
    assert_eq!(next_scene_number(&[]), 1);
    assert_eq!(next_scene_number(&[Scene::new(2), Scene::new(5)]), 6);
}

#[test]
fn image_urls_start_then_end() {
    let mut scene = Scene::new(1);
    scene.end_frame.image_url = Some("end".into());
    scene.start_frame.image_url = Some("start".into());
    assert_eq!(scene.image_urls().collect::<Vec<_>>(), vec!["start", "end"]);
}

#[test]
fn scene_without_frames_deserializes() {
    let scene: Scene = serde_json::from_str(r#"{"scene":2}"#).unwrap();
    assert_eq!(scene, Scene::new(2));
}
