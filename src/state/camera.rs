/// Ingredient scanning state
///
/// The scan is simulated: a capture waits for a short "analysis" delay and
/// then reports the fixed set of detected ingredients.

use std::time::Duration;

use super::data::{DetectedIngredient, DETECTED_INGREDIENTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Viewfinder live, shutter enabled
    Ready,
    /// Photo taken, waiting for the analysis
    Capturing,
    /// Detected ingredients shown for confirmation
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Capture,
    Retake,
}

#[derive(Debug)]
pub struct Camera {
    stage: Stage,
    detected: Vec<DetectedIngredient>,
    /// Identifies the capture currently being analysed
    generation: u64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            stage: Stage::Ready,
            detected: Vec::new(),
            generation: 0,
        }
    }
}

impl Camera {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn detected(&self) -> &[DetectedIngredient] {
        &self.detected
    }

    /// Back to a fresh viewfinder. The generation keeps counting so results
    /// of captures taken before the reset stay stale.
    pub fn reset(&mut self) {
        self.stage = Stage::Ready;
        self.detected.clear();
    }

    /// Handle a view message. Returns the capture generation when an analysis
    /// should be started.
    pub fn update(&mut self, message: Message) -> Option<u64> {
        match message {
            Message::Capture if self.stage == Stage::Ready => {
                self.stage = Stage::Capturing;
                self.generation += 1;
                Some(self.generation)
            }
            Message::Capture => None,
            Message::Retake => {
                self.reset();
                None
            }
        }
    }

    /// Analysis finished. Ignored unless it belongs to the capture in flight.
    pub fn analysis_complete(&mut self, generation: u64, detected: Vec<DetectedIngredient>) {
        if self.stage != Stage::Capturing || generation != self.generation {
            return;
        }
        self.stage = Stage::Results;
        self.detected = detected;
    }
}

/// Simulated ingredient recognition, tagged with the capture it answers
pub async fn analyze_capture(generation: u64, delay: Duration) -> (u64, Vec<DetectedIngredient>) {
    tokio::time::sleep(delay).await;
    (generation, DETECTED_INGREDIENTS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_cycle() {
        let mut camera = Camera::default();
        let generation = camera.update(Message::Capture);
        assert_eq!(generation, Some(1));
        assert_eq!(camera.stage(), Stage::Capturing);

        // A second press while analysing does nothing
        assert_eq!(camera.update(Message::Capture), None);

        camera.analysis_complete(1, DETECTED_INGREDIENTS.to_vec());
        assert_eq!(camera.stage(), Stage::Results);
        assert_eq!(camera.detected().len(), 5);

        camera.update(Message::Retake);
        assert_eq!(camera.stage(), Stage::Ready);
        assert!(camera.detected().is_empty());
    }

    #[test]
    fn test_stale_analysis_is_ignored() {
        let mut camera = Camera::default();
        camera.update(Message::Capture);
        camera.update(Message::Retake);
        camera.analysis_complete(1, DETECTED_INGREDIENTS.to_vec());
        assert_eq!(camera.stage(), Stage::Ready);
        assert!(camera.detected().is_empty());
    }

    #[test]
    fn test_result_of_earlier_capture_is_ignored() {
        let mut camera = Camera::default();
        camera.update(Message::Capture);
        camera.update(Message::Retake);
        assert_eq!(camera.update(Message::Capture), Some(2));

        camera.analysis_complete(1, DETECTED_INGREDIENTS.to_vec());
        assert_eq!(camera.stage(), Stage::Capturing);

        camera.analysis_complete(2, DETECTED_INGREDIENTS.to_vec());
        assert_eq!(camera.stage(), Stage::Results);
    }

    #[tokio::test]
    async fn test_analyze_capture() {
        let (generation, detected) = analyze_capture(7, Duration::from_millis(1)).await;
        assert_eq!(generation, 7);
        assert_eq!(detected[0].name, "Tomatoes");
        assert_eq!(detected[0].confidence, 98);
    }
}
