use std::f64::consts::FRAC_PI_8;
use std::io;

use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use joyserial::app::Dispatcher;
use joyserial::sink::{LineEnding, SerialSink};
use joyserial_input::{HatValue, InputEvent};
use joyserial_profile::my_power_2in1;

pub fn bench_button_path(c: &mut Criterion) {
    let mut d = Dispatcher::new(my_power_2in1(), SerialSink::new(io::sink(), LineEnding::Crlf));
    // Button 11 is the last entry, so every press walks the whole list.
    let down = InputEvent::ButtonDown { button: 11 };
    let up = InputEvent::ButtonUp { button: 11 };

    c.bench_function("dispatch_button_press_release", |b| {
        b.iter(|| {
            black_box(d.dispatch(black_box(&down)));
            black_box(d.dispatch(black_box(&up)));
        })
    });
}

pub fn bench_axis_path(c: &mut Criterion) {
    let mut d = Dispatcher::new(my_power_2in1(), SerialSink::new(io::sink(), LineEnding::Crlf));

    c.bench_function("dispatch_axis_sweep", |b| {
        b.iter(|| {
            for t in 0..16u32 {
                let angle = f64::from(t) * FRAC_PI_8;
                // Right stick axes force a miss on the left stick first.
                d.dispatch(&InputEvent::AxisMotion { axis: 2, value: angle.cos() });
                d.dispatch(&InputEvent::AxisMotion { axis: 3, value: angle.sin() });
            }
        })
    });
}

pub fn bench_hat_path(c: &mut Criterion) {
    let mut d = Dispatcher::new(my_power_2in1(), SerialSink::new(io::sink(), LineEnding::Crlf));
    let moves = [HatValue::UP, HatValue::CENTERED, HatValue::LEFT, HatValue::CENTERED];

    c.bench_function("dispatch_hat_moves", |b| {
        b.iter(|| {
            for value in moves {
                black_box(d.dispatch(&InputEvent::HatMotion { hat: 0, value }));
            }
        })
    });
}

criterion_group!(benches, bench_button_path, bench_axis_path, bench_hat_path);
criterion_main!(benches);
