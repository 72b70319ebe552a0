mod tests {
    use wirelight_composer::{Strip, physical_index};

    #[test]
    fn test_physical_index_width_4() {
        assert_eq!(physical_index(0, 0, 4), 0);
        assert_eq!(physical_index(1, 0, 4), 1);
        assert_eq!(physical_index(0, 1, 4), 7);
        assert_eq!(physical_index(3, 1, 4), 4);
        assert_eq!(physical_index(0, 2, 4), 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "column outside the strip")]
    fn test_physical_index_rejects_column_past_width() {
        let _ = physical_index(4, 1, 4);
    }

    #[test]
    fn test_physical_index_is_bijection() {
        for (width, height) in [(4u32, 3u32), (5, 4), (1, 6), (7, 1)] {
            let strip = Strip::new(width, height, 1).unwrap();
            let mut seen = vec![false; strip.len() as usize];
            for y in 0..height {
                for x in 0..width {
                    let index = strip.physical_index(x, y);
                    assert!(index < strip.len());
                    assert!(!seen[index as usize], "{index} mapped twice");
                    seen[index as usize] = true;
                }
            }
            assert!(seen.iter().all(|hit| *hit));
        }
    }

    #[test]
    fn test_rows_alternate_direction() {
        let strip = Strip::new(3, 3, 1).unwrap();
        let row = |y| (0..3).map(|x| strip.physical_index(x, y)).collect::<Vec<_>>();
        assert_eq!(row(0), vec![0, 1, 2]);
        assert_eq!(row(1), vec![5, 4, 3]);
        assert_eq!(row(2), vec![6, 7, 8]);
    }
}
