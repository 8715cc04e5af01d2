//! DIPPID sensor feed
//!
//! Receives JSON capability datagrams over UDP from a DIPPID sender (a phone
//! app or the bundled `dippid-sender` bin) and keeps only the most recent
//! reading. There is no buffering and no backpressure: whatever arrived last
//! before a tick samples the feed is the truth for that tick, and anything
//! older is silently discarded.
//!
//! The feed is a UDP *client* of the sensor process; it never sends.

use std::io;
use std::net::UdpSocket;

use glam::Vec2;
use serde::Deserialize;

use crate::consts::TILT_STRENGTH;

/// Raw three-axis accelerometer sample
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One decoded DIPPID datagram. Capabilities the sender did not include
/// simply deserialize to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SensorReading {
    pub accelerometer: Option<AccelSample>,
    /// 0/1 button state
    pub button_1: Option<u8>,
}

impl SensorReading {
    /// Accelerometer mapped to a per-tick tilt displacement.
    ///
    /// The `strength * sin(raw)` mapping matches the sensor's handedness and
    /// saturates gracefully for large raw values; the deadzone is applied
    /// later, in the tick.
    pub fn tilt(&self) -> Option<Vec2> {
        self.accelerometer
            .map(|a| Vec2::new(TILT_STRENGTH * a.x.sin(), TILT_STRENGTH * a.y.sin()))
    }

    /// True iff `button_1` reads pressed
    pub fn button_pressed(&self) -> bool {
        self.button_1.is_some_and(|b| b != 0)
    }
}

/// Non-blocking UDP receiver for DIPPID datagrams
pub struct DippidFeed {
    socket: UdpSocket,
    latest: SensorReading,
}

impl DippidFeed {
    /// Bind the feed on the given local port
    pub fn bind(port: u16) -> io::Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", port))?;
        socket.set_nonblocking(true)?;
        log::info!("DIPPID feed listening on udp/{port}");
        Ok(Self {
            socket,
            latest: SensorReading::default(),
        })
    }

    /// Drain every pending datagram and return the freshest readings.
    ///
    /// Call once per tick. Capabilities update independently, so a sender
    /// that splits capabilities across datagrams still yields one coherent
    /// reading. Datagrams that fail to decode are skipped; a tick with no
    /// (valid) traffic re-reads the previous values.
    pub fn sample(&mut self) -> SensorReading {
        let mut buf = [0u8; 2048];
        loop {
            match self.socket.recv_from(&mut buf) {
                Ok((len, _)) => match serde_json::from_slice::<SensorReading>(&buf[..len]) {
                    Ok(reading) => {
                        if reading.accelerometer.is_some() {
                            self.latest.accelerometer = reading.accelerometer;
                        }
                        if reading.button_1.is_some() {
                            self.latest.button_1 = reading.button_1;
                        }
                    }
                    Err(err) => log::debug!("Skipping undecodable datagram: {err}"),
                },
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => break,
                Err(err) => {
                    log::warn!("Sensor socket error: {err}");
                    break;
                }
            }
        }
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_datagram() {
        let json = r#"{"accelerometer": {"x": 0.5, "y": -0.25, "z": 1.0}, "button_1": 1}"#;
        let reading: SensorReading = serde_json::from_str(json).unwrap();
        let accel = reading.accelerometer.unwrap();
        assert_eq!(accel.x, 0.5);
        assert_eq!(accel.y, -0.25);
        assert!(reading.button_pressed());
    }

    #[test]
    fn test_decode_missing_capabilities() {
        let reading: SensorReading = serde_json::from_str("{}").unwrap();
        assert!(reading.accelerometer.is_none());
        assert!(reading.tilt().is_none());
        assert!(!reading.button_pressed());
    }

    #[test]
    fn test_tilt_mapping() {
        let reading = SensorReading {
            accelerometer: Some(AccelSample {
                x: 0.3,
                y: -0.7,
                z: 0.0,
            }),
            button_1: Some(0),
        };
        let tilt = reading.tilt().unwrap();
        assert!((tilt.x - TILT_STRENGTH * 0.3f32.sin()).abs() < 1e-6);
        assert!((tilt.y - TILT_STRENGTH * (-0.7f32).sin()).abs() < 1e-6);
        assert!(!reading.button_pressed());
    }

    #[test]
    fn test_feed_keeps_most_recent_reading() {
        let feed = DippidFeed::bind(0).unwrap();
        let port = feed.socket.local_addr().unwrap().port();
        let sender = UdpSocket::bind("127.0.0.1:0").unwrap();

        for x in [0.1f32, 0.2, 0.3] {
            let msg = format!(r#"{{"accelerometer": {{"x": {x}, "y": 0.0, "z": 0.0}}}}"#);
            sender.send_to(msg.as_bytes(), ("127.0.0.1", port)).unwrap();
        }
        // Garbage after the good datagrams must not clobber the last reading
        sender.send_to(b"not json", ("127.0.0.1", port)).unwrap();

        // Give the localhost datagrams a moment to land
        std::thread::sleep(std::time::Duration::from_millis(50));

        let mut feed = feed;
        let reading = feed.sample();
        assert_eq!(reading.accelerometer.unwrap().x, 0.3);

        // No new traffic: the reading sticks
        let reading = feed.sample();
        assert_eq!(reading.accelerometer.unwrap().x, 0.3);

        // A button-only datagram must not clobber the accelerometer
        sender
            .send_to(br#"{"button_1": 1}"#, ("127.0.0.1", port))
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(50));
        let reading = feed.sample();
        assert!(reading.button_pressed());
        assert_eq!(reading.accelerometer.unwrap().x, 0.3);
    }
}
