#[cfg(test)]
mod tests {
    use crate::noise_pipeline::analysis::config::AnalysisConfig;
    use crate::noise_pipeline::analysis::pipeline::{NoiseAnalysisPipeline, format_report};
    use crate::noise_pipeline::bayer::MosaicPattern;
    use crate::noise_pipeline::common::error::{NoiseError, Result};
    use crate::noise_pipeline::frame::{FrameSource, RawFrame};

    struct MockSource {
        should_fail: bool,
    }

    impl FrameSource for MockSource {
        fn read_frame(&self, data: &[u8]) -> Result<RawFrame> {
            if self.should_fail {
                return Err(NoiseError::DecodeError("Mock decode error".to_string()));
            }
            // First byte of the file selects the constant frame level, so a
            // directory of one-byte files becomes a controlled sequence.
            let value = u16::from(data.first().copied().unwrap_or(0));
            RawFrame::new(4, 4, vec![value; 16], 8)
        }
    }

    fn constant_frames(levels: &[u16]) -> Vec<RawFrame> {
        levels
            .iter()
            .map(|&v| RawFrame::new(4, 4, vec![v; 16], 8).unwrap())
            .collect()
    }

    #[test]
    fn test_config_builder() {
        let config = AnalysisConfig::builder()
            .frame_count(Some(5))
            .mosaic_pattern(MosaicPattern::Rggb)
            .parallel(false)
            .build();

        assert_eq!(config.frame_count, Some(5));
        assert_eq!(config.mosaic_pattern, MosaicPattern::Rggb);
        assert!(!config.parallel);
    }

    #[test]
    fn test_constant_scene_reports_all_zero() {
        // A static scene with no noise at all: every metric must be 0.
        let frames = constant_frames(&[100, 100, 100]);
        let pipeline = NoiseAnalysisPipeline::new(AnalysisConfig::default());

        let report = pipeline.analyze(&frames).unwrap();
        for channel in report.channels() {
            assert_eq!(channel.total_noise, vec![0.0, 0.0, 0.0]);
            assert_eq!(channel.avg_total_noise, 0.0);
            assert_eq!(channel.fixed_pattern_noise, 0.0);
            assert_eq!(channel.temporal_noise, 0.0);
        }
    }

    #[test]
    fn test_brightness_drift_gives_zero_temporal_noise() {
        // Frames at different constant levels drift in brightness but have
        // no per-frame-centered variation.
        let frames = constant_frames(&[10, 20]);
        let pipeline = NoiseAnalysisPipeline::new(AnalysisConfig::default());

        let report = pipeline.analyze(&frames).unwrap();
        for channel in report.channels() {
            assert_eq!(channel.temporal_noise, 0.0);
        }
    }

    #[test]
    fn test_frame_count_limits_stack() {
        let frames = constant_frames(&[1, 2, 3, 4, 5]);
        let config = AnalysisConfig::builder().frame_count(Some(2)).build();
        let pipeline = NoiseAnalysisPipeline::new(config);

        let report = pipeline.analyze(&frames).unwrap();
        assert_eq!(report.red.total_noise.len(), 2);
        assert_eq!(report.green.total_noise.len(), 2);
        assert_eq!(report.blue.total_noise.len(), 2);
    }

    #[test]
    fn test_empty_frame_set_rejected() {
        let pipeline = NoiseAnalysisPipeline::new(AnalysisConfig::default());
        let result = pipeline.analyze(&[]);
        assert!(matches!(result, Err(NoiseError::EmptyFrameSet)));
    }

    #[test]
    fn test_mismatched_frames_rejected() {
        let mut frames = constant_frames(&[1, 2]);
        frames.push(RawFrame::new(6, 6, vec![3; 36], 8).unwrap());
        let pipeline = NoiseAnalysisPipeline::new(AnalysisConfig::default());

        let result = pipeline.analyze(&frames);
        assert!(matches!(
            result,
            Err(NoiseError::FrameDimensionMismatch { frame_index: 2, .. })
        ));
    }

    #[test]
    fn test_analyze_directory_with_mock_source() {
        let dir = tempfile::tempdir().unwrap();
        for (i, level) in [10u8, 20, 30].iter().enumerate() {
            std::fs::write(dir.path().join(format!("{}.png", i + 1)), [*level]).unwrap();
        }

        let pipeline = NoiseAnalysisPipeline::with_source(
            MockSource { should_fail: false },
            AnalysisConfig::default(),
        );
        let report = pipeline.analyze_directory(dir.path(), 3, "png").unwrap();

        assert_eq!(report.green.total_noise.len(), 3);
        assert_eq!(report.green.temporal_noise, 0.0);
    }

    #[test]
    fn test_source_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1.png"), [0u8]).unwrap();

        let pipeline = NoiseAnalysisPipeline::with_source(
            MockSource { should_fail: true },
            AnalysisConfig::default(),
        );
        let result = pipeline.analyze_directory(dir.path(), 1, "png");
        assert!(matches!(result, Err(NoiseError::DecodeError(_))));
    }

    #[test]
    fn test_missing_file_reported_as_input_error() {
        let dir = tempfile::tempdir().unwrap();

        let pipeline = NoiseAnalysisPipeline::with_source(
            MockSource { should_fail: false },
            AnalysisConfig::default(),
        );
        let result = pipeline.analyze_directory(dir.path(), 2, "png");
        assert!(matches!(result, Err(NoiseError::InputReadError(_))));
    }

    #[test]
    fn test_format_report_sections() {
        let frames = constant_frames(&[100, 100]);
        let pipeline = NoiseAnalysisPipeline::new(AnalysisConfig::default());
        let report = pipeline.analyze(&frames).unwrap();

        let text = format_report(&report);
        assert!(text.contains("=== Total Noise ==="));
        assert!(text.contains("=== Fixed Pattern Noise (FPN) ==="));
        assert!(text.contains("=== Temporal Noise ==="));
        assert!(text.contains("Green Total Noise (avg): 0"));
    }
}
