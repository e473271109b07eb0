// Everything the scene fetches before it can start.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Model,
    XRayTexture,
    SparkTexture,
    /// Cube face index in +x, -x, +y, -y, +z, -z order.
    SkyFace(u8),
    Font,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,
    pub url: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetManifest {
    pub model: &'static str,
    pub xray_texture: &'static str,
    pub spark_texture: &'static str,
    pub sky_faces: [&'static str; 6],
    pub font: &'static str,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            model: "static/models/BrainUVs.obj",
            xray_texture: "static/textures/brainXRayLight.png",
            spark_texture: "static/textures/spark1.png",
            sky_faces: [
                "static/textures/sky/px.png",
                "static/textures/sky/nx.png",
                "static/textures/sky/py.png",
                "static/textures/sky/ny.png",
                "static/textures/sky/pz.png",
                "static/textures/sky/nz.png",
            ],
            font: "static/fonts/helvetiker_regular.typeface.json",
        }
    }
}

impl AssetManifest {
    pub fn entries(&self) -> Vec<Asset> {
        let mut out = vec![
            Asset {
                kind: AssetKind::Model,
                url: self.model,
            },
            Asset {
                kind: AssetKind::SparkTexture,
                url: self.spark_texture,
            },
            Asset {
                kind: AssetKind::XRayTexture,
                url: self.xray_texture,
            },
        ];
        out.extend(self.sky_faces.iter().enumerate().map(|(i, url)| Asset {
            kind: AssetKind::SkyFace(i as u8),
            url,
        }));
        out.push(Asset {
            kind: AssetKind::Font,
            url: self.font,
        });
        out
    }

    pub fn len(&self) -> usize {
        3 + self.sky_faces.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
