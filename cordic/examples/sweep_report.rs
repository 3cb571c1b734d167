//! Console report for the default accuracy study.
//!
//! Run with `RUST_LOG=debug` to also see the per-N progress from the library.

use cordic::{Cordic, Lut, StudyReport, Sweep, SweepConfig, run_study};
use fixed_point::scalar_formats::Q2_14_G2;

fn print_sweep(label: &str, sweep: &Sweep) {
    println!("========== {label} ==========");
    for record in sweep.records() {
        println!(
            "N={:2}  max_err={:.8e}  {}",
            record.iterations,
            record.worst_case_error,
            if record.meets_target { "OK" } else { "" }
        );
    }
    println!();
}

fn print_rom(label: &str, lut: &Lut) {
    println!(
        "{label} ROM          : {} words x {} bits ({} bytes as i64)",
        lut.len(),
        lut.format().total_bits(),
        lut.as_bytes().len()
    );
}

fn print_details(report: &StudyReport) {
    if let Some(profile) = &report.circular_profile {
        let worst = profile
            .thetas
            .iter()
            .zip(&profile.cos_errors)
            .zip(&profile.sin_errors)
            .map(|((&theta, &cos_err), &sin_err)| (theta, cos_err, sin_err))
            .max_by(|a, b| a.1.max(a.2).total_cmp(&b.1.max(b.2)));
        if let Some((theta, cos_err, sin_err)) = worst {
            println!(
                "Circular worst case at theta={theta:+.6}: |cos_err|={cos_err:.3e} |sin_err|={sin_err:.3e}"
            );
        }
    }

    if let Some(grid) = &report.linear_grid {
        let size = grid.size();
        let worst = grid
            .errors
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1));
        if let Some((index, err)) = worst {
            let (a, b) = (grid.points[index / size], grid.points[index % size]);
            println!("Linear worst case at a={a:+.4}, b={b:+.4}: |mul_err|={err:.3e}");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let format = Q2_14_G2;
    let config = SweepConfig::default();

    println!("========== FIXED-POINT SETUP ==========");
    println!(
        "Format          : Q{}.{} (internal bits={})",
        format.integer_bits(),
        format.fractional_bits(),
        format.total_bits()
    );
    println!("LSB             : {:.8e}", format.lsb());
    println!(
        "Target error    : {} LSB = {:.8e}",
        config.target_lsb,
        config.target(format)
    );
    println!();
    println!("Ranges:");
    println!("  Circular: theta in [-pi/2, +pi/2] (no quadrant correction)");
    println!("  Linear  : a,b in [-0.999, +0.999]");
    println!();

    let report = run_study(format, &config)?;

    print_sweep("CIRCULAR MODE (sin/cos) SWEEP", &report.circular);
    print_sweep("LINEAR MODE (multiply) SWEEP", &report.linear);

    let show = |n: Option<u32>| n.map_or_else(|| "None".to_string(), |n| n.to_string());

    println!("========== SUMMARY ==========");
    println!("Minimum N (circular) : {}", show(report.circular.first_sufficient()));
    println!("Minimum N (linear)   : {}", show(report.linear.first_sufficient()));
    println!(
        "Chosen hardware N    : {}",
        show(report.recommendation.map(|r| r.iterations))
    );
    if let Some(rec) = report.recommendation {
        println!("K(N)                 : {:.8}", rec.gain);
        println!("1/K                  : {:.8}", rec.inverse_gain);

        let unit = Cordic::new(rec.iterations, report.format);
        print_rom("Angle", unit.angle_lut());
        print_rom("Step ", unit.step_lut());
    }
    println!();

    print_details(&report);

    Ok(())
}
