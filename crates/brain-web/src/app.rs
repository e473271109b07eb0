use crate::nav::Chrome;
use brain_core::{BrainScene, Director, StageCommand, StartMode};
use instant::Instant;

/// Shared page state. Event handlers and the frame loop borrow it through
/// `Rc<RefCell<App>>`.
pub struct App {
    pub scene: BrainScene,
    pub director: Director,
    pub chrome: Chrome,
    clock: Instant,
}

impl App {
    pub fn new(scene: BrainScene, chrome: Chrome) -> Self {
        Self {
            scene,
            director: Director::new(),
            chrome,
            clock: Instant::now(),
        }
    }

    /// Seconds since the scene was created.
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    pub fn begin(&mut self, mode: StartMode) {
        match mode {
            StartMode::Full => {
                let now = self.now();
                self.director.start(now);
            }
            StartMode::Skip => self.skip(),
        }
    }

    /// Jump to the end of the intro if it is still playing.
    pub fn skip(&mut self) {
        let commands = self.director.skip(&mut self.scene);
        self.dispatch(commands);
    }

    /// Run the director up to the current clock and hand its output to the
    /// chrome.
    pub fn advance(&mut self) {
        if !self.director.is_active() {
            return;
        }
        let now = self.now();
        let commands = self.director.advance(&mut self.scene, now);
        self.dispatch(commands);
    }

    fn dispatch(&mut self, commands: Vec<StageCommand>) {
        for cmd in commands {
            self.chrome.apply(cmd, &self.scene);
        }
    }
}
