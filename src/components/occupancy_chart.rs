use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use log::warn;

pub const MONTHLY_OCCUPANCY: [(&str, i32); 6] = [
    ("Maggio", 45),
    ("Giugno", 65),
    ("Luglio", 85),
    ("Agosto", 95),
    ("Settembre", 60),
    ("Ottobre", 40),
];

const LINE: RGBColor = RGBColor(0x3b, 0x82, 0xf6);

struct Palette {
    background: RGBColor,
    grid: RGBColor,
    text: RGBColor,
}

fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            background: RGBColor(0x1f, 0x29, 0x37),
            grid: RGBColor(0x4b, 0x55, 0x63),
            text: RGBColor(0xd1, 0xd5, 0xdb),
        }
    } else {
        Palette {
            background: RGBColor(0xff, 0xff, 0xff),
            grid: RGBColor(0xe5, 0xe7, 0xeb),
            text: RGBColor(0x4b, 0x55, 0x63),
        }
    }
}

fn draw(canvas: HtmlCanvasElement, dark: bool) -> Result<(), String> {
    let colors = palette(dark);
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&colors.background).map_err(|e| format!("{:?}", e))?;

    let last = MONTHLY_OCCUPANCY.len() as i32 - 1;
    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(32)
        .y_label_area_size(48)
        .build_cartesian_2d(0..last, 0..100)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .light_line_style(colors.grid.mix(0.0))
        .bold_line_style(colors.grid)
        .axis_style(colors.grid)
        .x_labels(MONTHLY_OCCUPANCY.len())
        .x_label_formatter(&|x| {
            MONTHLY_OCCUPANCY
                .get(*x as usize)
                .map(|(month, _)| month.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("{}%", y))
        .label_style(("sans-serif", 13).into_font().color(&colors.text))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    let points = MONTHLY_OCCUPANCY
        .iter()
        .enumerate()
        .map(|(i, (_, occupancy))| (i as i32, *occupancy));

    chart
        .draw_series(LineSeries::new(points.clone(), LINE.stroke_width(2)))
        .map_err(|e| format!("{:?}", e))?;
    chart
        .draw_series(points.map(|point| Circle::new(point, 4, LINE.filled())))
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct OccupancyChartProps {
    pub dark: bool,
}

/// Monthly occupancy line chart, redrawn when the theme changes.
#[function_component(OccupancyChart)]
pub fn occupancy_chart(props: &OccupancyChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |dark| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw(canvas, *dark) {
                    warn!("Occupancy chart not drawn: {}", e);
                }
            }
            || ()
        }, props.dark);
    }

    html! {
        <div class="occupancy-chart">
            <canvas
                ref={canvas_ref}
                width="560"
                height="260"
                style="max-width: 100%; border-radius: 12px;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_may_to_october() {
        let months: Vec<_> = MONTHLY_OCCUPANCY.iter().map(|(m, _)| *m).collect();
        assert_eq!(months.first(), Some(&"Maggio"));
        assert_eq!(months.last(), Some(&"Ottobre"));
        assert!(MONTHLY_OCCUPANCY.iter().all(|(_, pct)| (0..=100).contains(pct)));
    }

    #[test]
    fn august_peaks() {
        let peak = MONTHLY_OCCUPANCY.iter().max_by_key(|(_, pct)| *pct).unwrap();
        assert_eq!(peak, &("Agosto", 95));
    }
}
