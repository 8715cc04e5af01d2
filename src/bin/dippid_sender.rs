//! Synthetic DIPPID sender
//!
//! Emits plausible accelerometer and button datagrams the way a phone would,
//! so the game can be driven without hardware. A large stack of sine layers
//! with randomized frequencies and phases sums into smooth, drifting noise;
//! the button is the same signal run faster and thresholded.

use std::io;
use std::net::UdpSocket;
use std::time::{Duration, Instant};

use rand::Rng;
use serde_json::json;

const SIN_LAYERS: usize = 8000;
const TARGET: &str = "127.0.0.1:5700";
const SEND_INTERVAL: Duration = Duration::from_millis(10);

const ACCEL_SPEED: f64 = 0.5;
const ACCEL_BIAS: f64 = 0.1;
const BUTTON_SPEED: f64 = 7.0;
const BUTTON_BIAS: f64 = 1.0;
const BUTTON_THRESHOLD: f64 = 0.75;
const FREQUENCY_BIAS: f64 = 0.00003;

struct SinLayer {
    frequency: f64,
    phase: f64,
}

/// Sum of many low-frequency sine waves, one shared amplitude
struct LayeredSin {
    layers: Vec<SinLayer>,
    amplitude: f64,
}

impl LayeredSin {
    fn new(rng: &mut impl Rng, count: usize) -> Self {
        let layers = (0..count)
            .map(|i| SinLayer {
                frequency: rng.random::<f64>() * (i as f64 + 1.0) * FREQUENCY_BIAS,
                phase: rng.random::<f64>() * std::f64::consts::TAU,
            })
            .collect();
        Self {
            layers,
            amplitude: 1.0 / (count as f64).ln(),
        }
    }

    fn value(&self, time: f64, offset: f64, speed: f64, bias: f64) -> f64 {
        let t = time * speed;
        let sum: f64 = self
            .layers
            .iter()
            .map(|l| (l.frequency * (t + offset) + l.phase).sin())
            .sum();
        sum * self.amplitude * bias
    }
}

fn run() -> io::Result<()> {
    let mut rng = rand::rng();
    let waves = LayeredSin::new(&mut rng, SIN_LAYERS);
    // Independent offsets decorrelate the three axes
    let offset_x = rng.random_range(0..65536) as f64;
    let offset_y = rng.random_range(0..65536) as f64;
    let offset_z = rng.random_range(0..65536) as f64;

    let socket = UdpSocket::bind("127.0.0.1:0")?;
    log::info!("Sending synthetic DIPPID datagrams to {TARGET}");

    let start = Instant::now();
    loop {
        let t = start.elapsed().as_secs_f64();
        let button = waves.value(t, 0.0, BUTTON_SPEED, BUTTON_BIAS) > BUTTON_THRESHOLD;
        let message = json!({
            "accelerometer": {
                "x": waves.value(t, offset_x, ACCEL_SPEED, ACCEL_BIAS),
                "y": waves.value(t, offset_y, ACCEL_SPEED, ACCEL_BIAS),
                "z": waves.value(t, offset_z, ACCEL_SPEED, ACCEL_BIAS),
            },
            "button_1": u8::from(button),
        });

        socket.send_to(message.to_string().as_bytes(), TARGET)?;
        log::debug!("{message}");
        std::thread::sleep(SEND_INTERVAL);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        log::error!("Sender stopped: {err}");
        std::process::exit(1);
    }
}
