use std::path::Path;

use csv::ReaderBuilder;
use ringbeat::{
    avec::Handler,
    record::{HeartRate, RrIntervals, Waveform},
};

#[test]
fn publish_frames() {
    const PATH: &str = "fixtures/frames.csv";
    let mut validator = Validator::new(PATH);

    while let Some((frame, expected)) = validator.next_frame() {
        let published = ringbeat::avec::publish(&frame, &mut validator);
        assert_eq!(published, expected.is_some(), "frame {}", hex::encode(&frame));

        let events = std::mem::take(&mut validator.0);
        assert_eq!(events, expected.unwrap_or_default(), "frame {}", hex::encode(&frame));
    }
}

#[test]
fn decode_frames_twice() {
    const PATH: &str = "fixtures/frames.csv";
    let mut validator = Validator::new(PATH);

    while let Some((frame, expected)) = validator.next_frame() {
        let first = ringbeat::avec::decode(&frame);
        let second = ringbeat::avec::decode(&frame);
        assert_eq!(first.is_some(), expected.is_some());
        assert_eq!(first, second);
    }
}

/// Collects published records as strings, and holds the expected rows of a
/// fixture: a hex frame, then either `none` or the record kind and its fields.
struct Validator(Vec<String>, Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(vec![], expected)
    }

    fn next_frame(&mut self) -> Option<(Vec<u8>, Option<Vec<String>>)> {
        if self.1.is_empty() {
            return None;
        }

        let mut row = self.1.remove(0);
        let frame = hex::decode(row.remove(0)).unwrap();
        let expected = (row[0] != "none").then_some(row);

        Some((frame, expected))
    }

    fn push_heart_rate(&mut self, m: &HeartRate) {
        self.0.extend([
            m.wearing_status.to_string(),
            m.heart_rate.to_string(),
            m.hrv.to_string(),
            m.stress_index.to_string(),
            format!("{:.2}", m.temperature),
        ]);
    }
}

impl Handler for Validator {
    fn on_heart_rate_result(&mut self, result: &HeartRate) {
        self.0.push("result".to_string());
        self.push_heart_rate(result);
    }

    fn on_heart_rate_push(&mut self, frame_id: u8, push: &HeartRate) {
        self.0.push("push".to_string());
        self.0.push(frame_id.to_string());
        self.push_heart_rate(push);
    }

    fn on_progress(&mut self, percentage: u8) {
        self.0.push("progress".to_string());
        self.0.push(percentage.to_string());
    }

    fn on_waveform(&mut self, waveform: &Waveform) {
        assert_eq!(waveform.ppg.len(), waveform.accel.len());

        self.0.push("waveform".to_string());
        self.0.push(waveform.seq.to_string());
        self.0.push(waveform.declared_count.to_string());
        for (ppg, [x, y, z]) in waveform.ppg.iter().zip(&waveform.accel) {
            self.0.extend([ppg.to_string(), x.to_string(), y.to_string(), z.to_string()]);
        }
    }

    fn on_rr_interval(&mut self, rr: &RrIntervals) {
        self.0.push("rr".to_string());
        self.0.push(rr.seq.to_string());
        self.0.push(rr.declared_count.to_string());
        self.0.extend(rr.rr.iter().map(|v| v.to_string()));
    }
}
